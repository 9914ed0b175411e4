//! Общие типы и чистая логика, разделяемые backend и frontend:
//! агрегаты контента, таксономия категорий, фильтрация и пагинация списков.

pub mod domain;
pub mod shared;
