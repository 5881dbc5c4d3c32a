use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::catalog::CatalogState;

/// Распределяет фильмы по залам.
///
/// Инварианты: зал показывает не больше одного фильма, фильм считается
/// распределенным после первого успешного назначения. Источник случайности
/// инжектируется (сидируемый генератор), чтобы тесты могли зафиксировать
/// выбор при добавлении зала.
pub struct AllocationEngine {
    rng: StdRng,
}

impl AllocationEngine {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    /// Выделяет фильму первый свободный зал в порядке регистрации залов.
    ///
    /// False, если фильм неизвестен или свободных залов нет — при нехватке
    /// залов это штатный исход, а не ошибка.
    pub fn allocate(&mut self, state: &mut CatalogState, movie_id: u32) -> bool {
        let Some(&movie_idx) = state.movie_index.get(&movie_id) else {
            return false;
        };

        let Some(theater) = state.theaters.iter_mut().find(|t| !t.allocated) else {
            debug!("no free theater for movie {}", movie_id);
            return false;
        };

        theater.allocated = true;
        let theater_id = theater.id;
        state.allocations.entry(movie_id).or_default().push(theater_id);
        state.movies[movie_idx].allocated = true;

        debug!("movie {} allocated to theater {}", movie_id, theater_id);
        true
    }

    /// Пристраивает только что зарегистрированный зал.
    ///
    /// Сначала фильмы, у которых залов еще нет (в порядке регистрации);
    /// если такие кончились — показ случайного фильма расширяется на новый
    /// зал. Пока фильмов нет вовсе, зал остается свободным.
    pub fn on_theater_added(&mut self, state: &mut CatalogState, theater_id: u32) {
        if state.movies.is_empty() {
            return;
        }

        if let Some(movie_id) = state.movies.iter().find(|m| !m.allocated).map(|m| m.id) {
            self.allocate(state, movie_id);
            return;
        }

        // Все фильмы уже где-то идут: новый зал достается случайному
        let pick = self.rng.gen_range(0..state.movies.len());
        let movie_id = state.movies[pick].id;

        let Some(&theater_idx) = state.theater_index.get(&theater_id) else {
            return;
        };
        let theater = &mut state.theaters[theater_idx];
        if theater.allocated {
            return;
        }

        theater.allocated = true;
        state.allocations.entry(movie_id).or_default().push(theater_id);
        debug!("theater {} extends showings of movie {}", theater_id, movie_id);
    }
}
