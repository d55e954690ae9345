use crate::slots::SlotCandidate;
use anyhow::Result;

pub fn format_slot(index: usize, slot: &SlotCandidate) -> String {
    format!("Slot {}: center=({}, {}), bounds=[{}-{}, {}-{}], size={}x{}",
        index, slot.center_x(), slot.center_y(),
        slot.x_min, slot.x_max, slot.y_min, slot.y_max,
        slot.width(), slot.height())
}

/// Container menu registration, using the slot's top-left corner
pub fn format_menu_slot(index: usize, slot: &SlotCandidate) -> String {
    format!("this.addSlot(new SlotItemHandler(..., {}, {}, {}));", index, slot.x_min, slot.y_min)
}

pub fn print_slots(slots: &[SlotCandidate]) -> Result<()> {
    if slots.is_empty() {
        println!("No slots found");
        return Ok(());
    }
    println!("Found {} potential slots:", slots.len());
    for (n, slot) in slots.iter().enumerate() {
        println!("{}", format_slot(n, slot));
    }
    Ok(())
}

pub fn print_menu_slots(slots: &[SlotCandidate], limit: Option<usize>) -> Result<()> {
    let count = limit.unwrap_or(slots.len()).min(slots.len());
    println!("Menu slot registrations (first {}):", count);
    for (n, slot) in slots.iter().take(count).enumerate() {
        println!("{}", format_menu_slot(n, slot));
    }
    Ok(())
}
