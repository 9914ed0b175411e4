use super::EntityMetadata;

/// Корень агрегата контента.
///
/// Статические методы описывают сам тип: по ним строится имя таблицы
/// и текст ошибок вида "Project not found".
pub trait AggregateRoot {
    type Id;

    fn id(&self) -> Self::Id;

    fn metadata(&self) -> &EntityMetadata;

    /// Индекс агрегата, например "a003"
    fn aggregate_index() -> &'static str;

    /// Имя коллекции, например "project"
    fn collection_name() -> &'static str;

    /// Имя элемента для сообщений пользователю
    fn element_name() -> &'static str;

    /// Имя таблицы SQLite, например "a003_project"
    fn table_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }
}
