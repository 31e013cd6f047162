use epicycles::{AnimationState, WaveKind, MAX_TERMS};

fn state_with(count: usize) -> AnimationState {
    let mut s = AnimationState::default();
    s.on_slider_change(count);
    s
}

#[test]
fn slider_updates_text_mirror() {
    let s = state_with(37);
    assert_eq!(s.params.term_count, 37);
    assert_eq!(s.term_text, "37");
}

#[test]
fn slider_values_are_clamped() {
    let s = state_with(0);
    assert_eq!(s.params.term_count, 1);
    let s = state_with(50_000);
    assert_eq!(s.params.term_count, MAX_TERMS);
}

#[test]
fn text_above_range_clamps_to_max() {
    let mut s = state_with(10);
    assert!(s.on_text_change("5000"));
    assert_eq!(s.params.term_count, 1000);
}

#[test]
fn text_below_range_clamps_to_one() {
    let mut s = state_with(10);
    assert!(s.on_text_change("0"));
    assert_eq!(s.params.term_count, 1);
    let mut s = state_with(10);
    assert!(s.on_text_change("-3"));
    assert_eq!(s.params.term_count, 1);
}

#[test]
fn non_numeric_text_is_ignored() {
    let mut s = state_with(10);
    assert!(!s.on_text_change("abc"));
    assert_eq!(s.params.term_count, 10);
    assert!(!s.on_text_change(""));
    assert_eq!(s.params.term_count, 10);
}

#[test]
fn text_with_surrounding_whitespace_is_accepted() {
    let mut s = state_with(10);
    assert!(s.on_text_change(" 42 "));
    assert_eq!(s.params.term_count, 42);
}

#[test]
fn default_state_starts_with_one_square_term() {
    let s = AnimationState::default();
    assert_eq!(s.params.term_count, 1);
    assert_eq!(s.params.wave_kind, WaveKind::Square);
    assert_eq!(s.phase, 0.0);
    assert!(s.trace.is_empty());
    assert!(!s.paused);
}

#[test]
fn advance_uses_fixed_step_and_respects_pause() {
    let mut s = AnimationState::default();
    s.advance();
    s.advance();
    assert!((s.phase - 0.1).abs() < 1e-12);
    s.toggle_pause();
    s.advance();
    assert!((s.phase - 0.1).abs() < 1e-12);
}

#[test]
fn reset_rewinds_phase_and_clears_trace() {
    let mut s = AnimationState::default();
    s.trace.push(3.0);
    s.advance();
    s.reset();
    assert_eq!(s.phase, 0.0);
    assert!(s.trace.is_empty());
}

#[test]
fn wave_kind_can_be_selected_and_cycled() {
    let mut s = AnimationState::default();
    s.set_wave_kind(WaveKind::Triangle);
    assert_eq!(s.params.wave_kind, WaveKind::Triangle);
    s.next_wave_kind();
    assert_eq!(s.params.wave_kind, WaveKind::Square);
}

#[test]
fn huge_numeric_text_still_clamps() {
    let mut s = state_with(10);
    assert!(s.on_text_change("99999999999999999999"));
    assert_eq!(s.params.term_count, MAX_TERMS);
    assert!(s.on_text_change("-99999999999999999999"));
    assert_eq!(s.params.term_count, 1);
    assert!(s.on_text_change("+99999999999999999999"));
    assert_eq!(s.params.term_count, MAX_TERMS);
}
