use super::*;

#[test]
fn fill_width_is_clamped_percentage() {
    assert_eq!(capacity_fill_style(5), "width: 25%");
    assert_eq!(capacity_fill_style(30), "width: 100%");
}

#[test]
fn dot_class_reflects_level() {
    assert_eq!(capacity_dot_class(CapacityLevel::for_parked(19)), "capacity-dot capacity-dot--full");
    assert_eq!(capacity_dot_class(CapacityLevel::for_parked(0)), "capacity-dot capacity-dot--free");
}
