use std::collections::HashMap;

use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{debug, info};

use super::allocation::AllocationEngine;
use super::booking;
use crate::errors::CatalogError;
use crate::models::{Movie, SeatBank, Theater};

/// Реестры и карта распределения. Арена в порядке регистрации плюс индекс
/// id -> позиция, чтобы поиск по идентификатору был O(1).
pub(crate) struct CatalogState {
    pub(crate) movies: Vec<Movie>,
    pub(crate) theaters: Vec<Theater>,
    pub(crate) movie_index: HashMap<u32, usize>,
    pub(crate) theater_index: HashMap<u32, usize>,
    /// movie id -> залы, в которых фильм идет сейчас
    pub(crate) allocations: HashMap<u32, Vec<u32>>,
}

impl CatalogState {
    pub(crate) fn new() -> Self {
        Self {
            movies: Vec::new(),
            theaters: Vec::new(),
            movie_index: HashMap::new(),
            theater_index: HashMap::new(),
            allocations: HashMap::new(),
        }
    }

    /// False на дубликат id или пустое имя; записи не меняются.
    pub(crate) fn insert_movie(&mut self, movie: Movie) -> bool {
        if movie.name.is_empty() || self.movie_index.contains_key(&movie.id) {
            return false;
        }
        self.movie_index.insert(movie.id, self.movies.len());
        self.movies.push(movie);
        true
    }

    pub(crate) fn insert_theater(&mut self, theater: Theater) -> bool {
        if theater.name.is_empty() || self.theater_index.contains_key(&theater.id) {
            return false;
        }
        self.theater_index.insert(theater.id, self.theaters.len());
        self.theaters.push(theater);
        true
    }
}

struct Inner {
    catalog: CatalogState,
    engine: AllocationEngine,
}

/// Снимок каталога для выгрузки наружу (копия, без доступа к внутренностям).
#[derive(Debug, Serialize)]
pub struct CatalogSnapshot {
    pub movies: Vec<Movie>,
    pub theaters: Vec<Theater>,
    pub allocations: HashMap<u32, Vec<u32>>,
}

/// Фасад каталога: единственная точка мутации всей модели.
///
/// Все реестры, карта распределения и движок живут за одним мьютексом на
/// весь сервис; каждая операция (включая чтение — политика единообразная)
/// держит замок на всю свою длительность. Внутри критической секции нет
/// await и нет ввода-вывода, так что время удержания ограничено длиной
/// списка мест.
pub struct CatalogService {
    state: Mutex<Inner>,
}

impl CatalogService {
    pub fn new(allocation_seed: Option<u64>) -> Self {
        Self {
            state: Mutex::new(Inner {
                catalog: CatalogState::new(),
                engine: AllocationEngine::new(allocation_seed),
            }),
        }
    }

    /// Регистрирует фильм и сразу пытается выделить ему зал.
    /// False на дубликат id или пустое имя.
    pub async fn add_movie(&self, movie: Movie) -> bool {
        let movie_id = movie.id;
        let mut inner = self.state.lock().await;
        if !inner.catalog.insert_movie(movie) {
            debug!("movie {} rejected: duplicate id or empty name", movie_id);
            return false;
        }

        let Inner { catalog, engine } = &mut *inner;
        // Неудача распределения — штатный случай при нехватке залов
        engine.allocate(catalog, movie_id);

        info!("movie {} registered", movie_id);
        true
    }

    /// Регистрирует зал и пристраивает его: сначала фильмы без залов,
    /// иначе показ случайного фильма расширяется на новый зал.
    pub async fn add_theater(&self, theater: Theater) -> bool {
        let theater_id = theater.id;
        let mut inner = self.state.lock().await;
        if !inner.catalog.insert_theater(theater) {
            debug!("theater {} rejected: duplicate id or empty name", theater_id);
            return false;
        }

        let Inner { catalog, engine } = &mut *inner;
        engine.on_theater_added(catalog, theater_id);

        info!("theater {} registered", theater_id);
        true
    }

    /// Идентификаторы всех зарегистрированных фильмов.
    pub async fn all_movies(&self) -> Vec<u32> {
        let inner = self.state.lock().await;
        inner.catalog.movies.iter().map(|m| m.id).collect()
    }

    /// Копия списка залов, в которых идет фильм. Пустой список — фильм
    /// известен, но залов ему пока не досталось.
    pub async fn theaters_for_movie(&self, movie_id: u32) -> Result<Vec<u32>, CatalogError> {
        let inner = self.state.lock().await;
        if !inner.catalog.movie_index.contains_key(&movie_id) {
            return Err(CatalogError::MovieNotFound(movie_id));
        }
        Ok(inner
            .catalog
            .allocations
            .get(&movie_id)
            .cloned()
            .unwrap_or_default())
    }

    /// Свободные места зала; пустой список для неизвестного зала.
    pub async fn available_seats(&self, theater_id: u32) -> Vec<u32> {
        let inner = self.state.lock().await;
        match inner.catalog.theater_index.get(&theater_id) {
            Some(&idx) => inner.catalog.theaters[idx].available_seats(),
            None => Vec::new(),
        }
    }

    /// Бронирует места в зале в переданном порядке, под общим замком
    /// каталога. False для неизвестного зала или пустого списка. Политика
    /// частичного применения описана в [`booking::book_all`].
    pub async fn book_seats(&self, theater_id: u32, seat_ids: &[u32]) -> bool {
        if seat_ids.is_empty() {
            return false;
        }

        let mut inner = self.state.lock().await;
        let Some(&idx) = inner.catalog.theater_index.get(&theater_id) else {
            debug!("booking rejected: unknown theater {}", theater_id);
            return false;
        };

        let booked = booking::book_all(&mut inner.catalog.theaters[idx], seat_ids);
        if booked {
            info!("booked {} seat(s) in theater {}", seat_ids.len(), theater_id);
        }
        booked
    }

    pub async fn is_valid_movie(&self, movie_id: u32) -> bool {
        let inner = self.state.lock().await;
        inner.catalog.movie_index.contains_key(&movie_id)
    }

    pub async fn is_valid_theater(&self, theater_id: u32) -> bool {
        let inner = self.state.lock().await;
        inner.catalog.theater_index.contains_key(&theater_id)
    }

    /// True, если оба идентификатора известны и зал числится за фильмом.
    pub async fn is_movie_shown_in_theater(&self, theater_id: u32, movie_id: u32) -> bool {
        let inner = self.state.lock().await;
        if !inner.catalog.theater_index.contains_key(&theater_id)
            || !inner.catalog.movie_index.contains_key(&movie_id)
        {
            return false;
        }
        inner
            .catalog
            .allocations
            .get(&movie_id)
            .map_or(false, |ids| ids.contains(&theater_id))
    }

    pub async fn movie_name(&self, movie_id: u32) -> Result<String, CatalogError> {
        let inner = self.state.lock().await;
        inner
            .catalog
            .movie_index
            .get(&movie_id)
            .map(|&idx| inner.catalog.movies[idx].name.clone())
            .ok_or(CatalogError::MovieNotFound(movie_id))
    }

    pub async fn theater_name(&self, theater_id: u32) -> Result<String, CatalogError> {
        let inner = self.state.lock().await;
        inner
            .catalog
            .theater_index
            .get(&theater_id)
            .map(|&idx| inner.catalog.theaters[idx].name.clone())
            .ok_or(CatalogError::TheaterNotFound(theater_id))
    }

    /// Полная копия состояния каталога, для выгрузки/диагностики.
    pub async fn snapshot(&self) -> CatalogSnapshot {
        let inner = self.state.lock().await;
        CatalogSnapshot {
            movies: inner.catalog.movies.clone(),
            theaters: inner.catalog.theaters.clone(),
            allocations: inner.catalog.allocations.clone(),
        }
    }
}
