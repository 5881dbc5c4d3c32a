use tracing::debug;

use crate::models::SeatBank;

/// Бронирует места по одному, в порядке, заданном вызывающей стороной.
///
/// Первый отказ прерывает вызов и весь вызов считается неуспешным, но места,
/// забронированные до отказа, остаются занятыми — частичное применение без
/// отката. Атомарен только перевод каждого отдельного места free -> booked.
pub fn book_all<B: SeatBank>(bank: &mut B, seat_ids: &[u32]) -> bool {
    for &seat_id in seat_ids {
        if !bank.book_seat(seat_id) {
            debug!("seat {} unavailable, aborting booking", seat_id);
            return false;
        }
    }
    true
}
