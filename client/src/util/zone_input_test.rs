use super::*;

#[test]
fn map_button_reads_dom_indices() {
    assert_eq!(map_button(0), Button::Primary);
    assert_eq!(map_button(1), Button::Middle);
    assert_eq!(map_button(2), Button::Secondary);
}

#[test]
fn map_button_maps_back_and_forward_to_other() {
    assert_eq!(map_button(3), Button::Other);
    assert_eq!(map_button(4), Button::Other);
    assert_eq!(map_button(-1), Button::Other);
}
