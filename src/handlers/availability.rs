use std::collections::HashSet;

use crate::models::appointment::AppointmentOption;
use crate::models::booking::Booking;

/// Copies each option with the slots already taken on `date` removed.
///
/// A slot is taken when a booking on that date names the option's treatment
/// and that slot. Slot order is kept as it appears in the option.
pub fn compute_availability(
    options: &[AppointmentOption],
    bookings: &[Booking],
    date: &str,
) -> Vec<AppointmentOption> {
    options
        .iter()
        .map(|option| {
            let booked: HashSet<&str> = bookings
                .iter()
                .filter(|b| b.appointment_date == date && b.treatment == option.name)
                .map(|b| b.slot.as_str())
                .collect();

            AppointmentOption {
                id: option.id,
                name: option.name.clone(),
                slots: option
                    .slots
                    .iter()
                    .filter(|slot| !booked.contains(slot.as_str()))
                    .cloned()
                    .collect(),
                price: option.price,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn option(name: &str, slots: &[&str]) -> AppointmentOption {
        AppointmentOption {
            id: None,
            name: name.to_string(),
            slots: slots.iter().map(|s| s.to_string()).collect(),
            price: 50.0,
        }
    }

    fn booking(date: &str, treatment: &str, slot: &str) -> Booking {
        Booking {
            id: None,
            email: "a@x.com".to_string(),
            appointment_date: date.to_string(),
            treatment: treatment.to_string(),
            slot: slot.to_string(),
            patient: None,
            phone: None,
            price: None,
            extra: mongodb::bson::Document::new(),
        }
    }

    #[test]
    fn removes_booked_slot() {
        let options = vec![option("Cavity filling", &["9am", "10am"])];
        let bookings = vec![booking("2024-01-01", "Cavity filling", "9am")];

        let result = compute_availability(&options, &bookings, "2024-01-01");

        assert_eq!(result[0].slots, vec!["10am"]);
        assert_eq!(result[0].price, 50.0);
        // input left alone
        assert_eq!(options[0].slots, vec!["9am", "10am"]);
    }

    #[test]
    fn no_bookings_keeps_every_slot() {
        let options = vec![option("Cavity filling", &["9am", "10am"])];

        let result = compute_availability(&options, &[], "2024-01-01");

        assert_eq!(result[0].slots, vec!["9am", "10am"]);
    }

    #[test]
    fn ignores_other_dates_and_treatments() {
        let options = vec![
            option("Cavity filling", &["9am", "10am"]),
            option("Teeth cleaning", &["9am", "11am"]),
        ];
        let bookings = vec![
            booking("2024-01-02", "Cavity filling", "9am"),
            booking("2024-01-01", "Teeth cleaning", "11am"),
            booking("2024-01-01", "Whitening", "10am"),
        ];

        let result = compute_availability(&options, &bookings, "2024-01-01");

        assert_eq!(result[0].slots, vec!["9am", "10am"]);
        assert_eq!(result[1].slots, vec!["9am"]);
    }

    #[test]
    fn empty_slot_list_stays_empty() {
        let options = vec![option("Consultation", &[])];
        let bookings = vec![booking("2024-01-01", "Consultation", "9am")];

        let result = compute_availability(&options, &bookings, "2024-01-01");

        assert!(result[0].slots.is_empty());
    }

    #[test]
    fn duplicate_bookings_collapse() {
        let options = vec![option("Cavity filling", &["9am", "10am", "11am"])];
        let bookings = vec![
            booking("2024-01-01", "Cavity filling", "10am"),
            booking("2024-01-01", "Cavity filling", "10am"),
        ];

        let result = compute_availability(&options, &bookings, "2024-01-01");

        assert_eq!(result[0].slots, vec!["9am", "11am"]);
    }

    fn slot_label() -> impl Strategy<Value = String> {
        (8..18u8).prop_map(|h| format!("{h}:00"))
    }

    proptest! {
        #[test]
        fn slot_removed_iff_booked(
            slots in prop::collection::vec(slot_label(), 0..8),
            booked in prop::collection::vec(
                (slot_label(), prop::bool::ANY, prop::bool::ANY),
                0..8,
            ),
        ) {
            let refs: Vec<&str> = slots.iter().map(String::as_str).collect();
            let options = vec![option("Cavity filling", &refs)];
            let bookings: Vec<Booking> = booked
                .iter()
                .map(|(slot, same_date, same_treatment)| {
                    booking(
                        if *same_date { "2024-01-01" } else { "2024-01-02" },
                        if *same_treatment { "Cavity filling" } else { "Whitening" },
                        slot,
                    )
                })
                .collect();

            let result = compute_availability(&options, &bookings, "2024-01-01");
            let remaining = &result[0].slots;

            for slot in remaining {
                prop_assert!(slots.contains(slot));
            }
            for slot in &slots {
                let taken = bookings.iter().any(|b| {
                    b.appointment_date == "2024-01-01"
                        && b.treatment == "Cavity filling"
                        && &b.slot == slot
                });
                prop_assert_eq!(remaining.contains(slot), !taken);
            }

            let again = compute_availability(&options, &bookings, "2024-01-01");
            prop_assert_eq!(&result, &again);
        }
    }
}
