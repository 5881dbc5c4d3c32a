use serde::{Deserialize, Serialize};

use super::Seat;

/// Доступ к банку мест одного зала.
///
/// Вынесено в трейт, чтобы в тестах движка бронирования можно было
/// подставить заглушку вместо настоящего зала.
pub trait SeatBank {
    /// Бронирует одно место. False, если места нет или оно уже занято.
    fn book_seat(&mut self, seat_id: u32) -> bool;
    /// Идентификаторы всех свободных мест.
    fn available_seats(&self) -> Vec<u32>;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theater {
    pub id: u32,
    pub name: String,
    /// True once a movie occupies the theater (at most one movie per theater).
    pub allocated: bool,
    seats: Vec<Seat>,
}

impl Theater {
    /// Создает зал с фиксированным банком мест: id 0..capacity, "Seat 1".."Seat N".
    pub fn new(id: u32, name: impl Into<String>, seat_capacity: u32) -> Self {
        let seats = (0..seat_capacity)
            .map(|i| Seat {
                id: i,
                label: format!("Seat {}", i + 1),
                booked: false,
            })
            .collect();

        Self {
            id,
            name: name.into(),
            allocated: false,
            seats,
        }
    }
}

impl SeatBank for Theater {
    fn book_seat(&mut self, seat_id: u32) -> bool {
        match self.seats.iter_mut().find(|s| s.id == seat_id) {
            Some(seat) if !seat.booked => {
                seat.booked = true;
                true
            }
            // Занято или такого места нет — штатный отказ, не ошибка
            _ => false,
        }
    }

    fn available_seats(&self) -> Vec<u32> {
        self.seats
            .iter()
            .filter(|s| !s.booked)
            .map(|s| s.id)
            .collect()
    }
}
