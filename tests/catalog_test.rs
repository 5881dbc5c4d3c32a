use std::collections::HashSet;
use std::sync::Arc;

use movie_booking::models::{Movie, Theater};
use movie_booking::{CatalogError, CatalogService};

fn movie(id: u32) -> Movie {
    Movie::new(id, format!("Movie{:02}", id))
}

fn theater(id: u32, capacity: u32) -> Theater {
    Theater::new(id, format!("Theater{:02}", id), capacity)
}

// Каталог с фиксированным сидом, фильмы регистрируются раньше залов
async fn catalog_with(movies: u32, theaters: u32, capacity: u32) -> CatalogService {
    let service = CatalogService::new(Some(42));
    for id in 1..=movies {
        assert!(service.add_movie(movie(id)).await);
    }
    for id in 1..=theaters {
        assert!(service.add_theater(theater(id, capacity)).await);
    }
    service
}

#[tokio::test]
async fn fresh_theater_lists_every_seat_as_available() {
    let service = catalog_with(0, 1, 20).await;

    let seats = service.available_seats(1).await;
    assert_eq!(seats, (0..20).collect::<Vec<u32>>());
}

#[tokio::test]
async fn two_movies_two_theaters_scenario() {
    let service = catalog_with(2, 2, 5).await;

    let for_first = service.theaters_for_movie(1).await.unwrap();
    let for_second = service.theaters_for_movie(2).await.unwrap();
    assert_eq!(for_first.len(), 1);
    assert_eq!(for_second.len(), 1);
    let covered: HashSet<u32> = for_first.iter().chain(&for_second).copied().collect();
    assert_eq!(covered, HashSet::from([1, 2]));

    assert!(service.book_seats(1, &[0, 1, 2]).await);
    assert_eq!(service.available_seats(1).await, vec![3, 4]);

    // место 0 уже занято: отказ и никаких изменений
    assert!(!service.book_seats(1, &[0]).await);
    assert_eq!(service.available_seats(1).await, vec![3, 4]);
}

#[tokio::test]
async fn booking_a_taken_seat_fails_every_time() {
    let service = catalog_with(1, 1, 5).await;

    assert!(service.book_seats(1, &[0]).await);
    for _ in 0..4 {
        assert!(!service.book_seats(1, &[0]).await);
        assert_eq!(service.available_seats(1).await, vec![1, 2, 3, 4]);
    }
}

#[tokio::test]
async fn exactly_one_of_concurrent_callers_gets_the_seat() {
    let service = Arc::new(catalog_with(1, 1, 5).await);

    let mut handles = Vec::new();
    for _ in 0..8 {
        let service = service.clone();
        handles.push(tokio::spawn(async move { service.book_seats(1, &[0]).await }));
    }

    let mut successes = 0;
    for handle in handles {
        if handle.await.unwrap() {
            successes += 1;
        }
    }

    assert_eq!(successes, 1);
    assert!(!service.available_seats(1).await.contains(&0));
}

#[tokio::test]
async fn every_movie_and_theater_is_allocated_when_theaters_suffice() {
    let service = catalog_with(3, 5, 10).await;

    let mut seen: HashSet<u32> = HashSet::new();
    for movie_id in service.all_movies().await {
        let theaters = service.theaters_for_movie(movie_id).await.unwrap();
        assert!(!theaters.is_empty(), "movie {} has no theater", movie_id);
        for theater_id in theaters {
            assert!(seen.insert(theater_id), "theater {} double-booked", theater_id);
        }
    }
    assert_eq!(seen, HashSet::from([1, 2, 3, 4, 5]));
}

#[tokio::test]
async fn extra_theater_extends_an_existing_movie() {
    let service = catalog_with(2, 2, 5).await;

    assert!(service.add_theater(theater(3, 5)).await);

    let mut total = 0;
    let mut holder = None;
    for movie_id in service.all_movies().await {
        let theaters = service.theaters_for_movie(movie_id).await.unwrap();
        total += theaters.len();
        if theaters.contains(&3) {
            holder = Some(movie_id);
        }
    }
    assert_eq!(total, 3);
    let holder = holder.expect("theater 3 must be allocated to some movie");
    assert!(service.all_movies().await.contains(&holder));
}

#[tokio::test]
async fn shown_in_theater_matches_allocation_list() {
    let service = catalog_with(2, 3, 5).await;

    for movie_id in service.all_movies().await {
        let allocated = service.theaters_for_movie(movie_id).await.unwrap();
        for theater_id in 1..=3u32 {
            assert_eq!(
                service.is_movie_shown_in_theater(theater_id, movie_id).await,
                allocated.contains(&theater_id)
            );
        }
    }
}

#[tokio::test]
async fn name_lookups_fail_with_not_found_for_unknown_ids() {
    let service = catalog_with(1, 1, 5).await;

    assert_eq!(service.movie_name(1).await.unwrap(), "Movie01");
    assert_eq!(
        service.movie_name(999).await,
        Err(CatalogError::MovieNotFound(999))
    );
    assert_eq!(
        service.theater_name(999).await,
        Err(CatalogError::TheaterNotFound(999))
    );
    assert_eq!(
        service.theaters_for_movie(999).await,
        Err(CatalogError::MovieNotFound(999))
    );
}

#[tokio::test]
async fn routine_negative_outcomes_are_value_level() {
    let service = catalog_with(1, 1, 5).await;

    // дубликаты и пустые имена отклоняются без изменений
    assert!(!service.add_movie(movie(1)).await);
    assert!(!service.add_theater(theater(1, 5)).await);
    assert!(!service.add_movie(Movie::new(9, "")).await);
    assert!(!service.is_valid_movie(9).await);

    // пустой список мест и неизвестный зал
    assert!(!service.book_seats(1, &[]).await);
    assert!(!service.book_seats(77, &[0]).await);
    assert!(service.available_seats(77).await.is_empty());

    assert!(service.is_valid_movie(1).await);
    assert!(service.is_valid_theater(1).await);
    assert!(!service.is_movie_shown_in_theater(77, 1).await);
}

#[tokio::test]
async fn unserved_movie_gets_the_next_theater() {
    let service = catalog_with(2, 1, 5).await;

    // залов меньше, чем фильмов: второй фильм пока нигде не идет
    assert_eq!(service.theaters_for_movie(2).await.unwrap(), Vec::<u32>::new());

    assert!(service.add_theater(theater(2, 5)).await);
    assert_eq!(service.theaters_for_movie(2).await.unwrap(), vec![2]);
}

#[tokio::test]
async fn partial_booking_keeps_earlier_seats() {
    let service = catalog_with(1, 1, 5).await;

    assert!(service.book_seats(1, &[2]).await);
    // отказ на месте 2 не откатывает места 0 и 1
    assert!(!service.book_seats(1, &[0, 1, 2, 3]).await);
    assert_eq!(service.available_seats(1).await, vec![3, 4]);
}
