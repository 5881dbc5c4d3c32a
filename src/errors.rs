use thiserror::Error;

/// Единственный исключительный случай в каталоге — неизвестный идентификатор
/// в запросе имени или распределения. Все остальные отказы штатные и
/// возвращаются значениями (bool / пустой список).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("movie {0} not found")]
    MovieNotFound(u32),

    #[error("theater {0} not found")]
    TheaterNotFound(u32),
}
