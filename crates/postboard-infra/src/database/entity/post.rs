//! Post entity for SeaORM.

use chrono::{DateTime as ChronoDateTime, Utc};
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub post: Option<String>,
    pub created_at: DateTime,
    pub updated_at: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Post.
///
/// `TIMESTAMP` columns carry no zone; they are written and read as UTC.
impl From<Model> for postboard_core::domain::Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name.unwrap_or_default(),
            post: model.post.unwrap_or_default(),
            created_at: as_utc(model.created_at),
            updated_at: model.updated_at.map(as_utc),
        }
    }
}

fn as_utc(naive: DateTime) -> ChronoDateTime<Utc> {
    naive.and_utc()
}
