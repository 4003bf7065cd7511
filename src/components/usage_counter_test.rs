use super::*;

#[test]
fn face_is_locked_without_permission() {
    assert_eq!(counter_face(UsageLimit::Remaining(3), false), CounterFace::Locked);
    assert_eq!(face_text(CounterFace::Locked), "⊘");
}

#[test]
fn unlimited_face_is_infinity() {
    assert_eq!(counter_face(UsageLimit::Unlimited, true), CounterFace::Unlimited);
    assert_eq!(face_text(counter_face(UsageLimit::Unlimited, true)), "∞");
    assert_eq!(face_text(counter_face(UsageLimit::Remaining(4), true)), "4");
    assert_eq!(face_text(counter_face(UsageLimit::Disabled, true)), "0");
}

#[test]
fn admin_minus_at_zero_announces_unlimited() {
    assert_eq!(decrement_text(UsageLimit::Disabled, true, true), "∞");
    assert_eq!(decrement_text(UsageLimit::Disabled, true, false), "−");
    assert_eq!(decrement_text(UsageLimit::Remaining(2), true, true), "−");
    assert_eq!(decrement_text(UsageLimit::Disabled, false, true), "−");
}
