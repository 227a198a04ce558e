// src/services/room_space.rs

use crate::models::rooms::{BuildingConfig, RoomSlot};

// Layout fixo: 10 quartos por andar. O último andar pode ficar incompleto.
pub const ROOMS_PER_FLOOR: u32 = 10;

/// Número do quarto para o índice (base zero) dentro do prédio.
///
/// `0 -> "101"`, `9 -> "110"`, `10 -> "201"`.
pub fn room_number(index: u32) -> String {
    let floor = index / ROOMS_PER_FLOOR + 1;
    let position = index % ROOMS_PER_FLOOR + 1;
    format!("{}{:02}", floor, position)
}

/// Gera todas as vagas físicas, na ordem dos prédios e depois na ordem do índice.
pub fn generate_room_slots(buildings: &[BuildingConfig]) -> Vec<RoomSlot> {
    buildings
        .iter()
        .flat_map(|building| {
            (0..building.total_room_count).map(move |i| RoomSlot {
                room_number: room_number(i),
                property: building.property_name.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn test_room_numbering_for_28_rooms() {
        let slots = generate_room_slots(&[BuildingConfig::new("Lalaine", 28)]);
        assert_eq!(slots.len(), 28);
        assert_eq!(slots[0].room_number, "101");
        assert_eq!(slots[9].room_number, "110");
        assert_eq!(slots[10].room_number, "201");
        assert_eq!(slots[27].room_number, "308");
    }

    #[test]
    fn test_preserves_building_order() {
        let slots = generate_room_slots(&[
            BuildingConfig::new("Lalaine", 2),
            BuildingConfig::new("Jade", 1),
        ]);
        let pairs: Vec<(&str, &str)> = slots
            .iter()
            .map(|s| (s.property.as_str(), s.room_number.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![("Lalaine", "101"), ("Lalaine", "102"), ("Jade", "101")]
        );
    }

    #[test]
    fn test_empty_building_has_no_slots() {
        assert!(generate_room_slots(&[BuildingConfig::new("Vazio", 0)]).is_empty());
    }

    #[test]
    fn test_tenth_floor_numbering() {
        assert_eq!(room_number(90), "1001");
        assert_eq!(room_number(99), "1010");
    }

    proptest! {
        /// Property: n quartos geram exatamente n vagas com números distintos
        #[test]
        fn generated_slots_are_unique(n in 0u32..500) {
            let slots = generate_room_slots(&[BuildingConfig::new("Jade", n)]);
            prop_assert_eq!(slots.len(), n as usize);
            let unique: HashSet<&str> = slots.iter().map(|s| s.room_number.as_str()).collect();
            prop_assert_eq!(unique.len(), n as usize);
        }
    }
}
