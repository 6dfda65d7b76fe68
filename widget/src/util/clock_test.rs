use super::*;

#[test]
fn format_clock_uses_twelve_hour_periods() {
    assert_eq!(format_clock(0, 5), "12:05 AM");
    assert_eq!(format_clock(9, 0), "09:00 AM");
    assert_eq!(format_clock(12, 30), "12:30 PM");
    assert_eq!(format_clock(23, 59), "11:59 PM");
}

#[test]
fn now_display_has_clock_shape() {
    let now = now_display();
    assert_eq!(now.len(), 8);
    assert!(now.ends_with("AM") || now.ends_with("PM"));
    assert_eq!(&now[2..3], ":");
}

#[test]
fn message_ids_are_unique() {
    assert_ne!(new_message_id(), new_message_id());
}
