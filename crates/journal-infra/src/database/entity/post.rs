//! Post entity for SeaORM.

use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

use journal_core::domain::{Post, PostDraft};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text")]
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub excerpt: String,
    #[sea_orm(column_type = "Text")]
    pub category: String,
    #[sea_orm(column_type = "Text")]
    pub image_url: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Post.
impl From<Model> for Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            excerpt: model.excerpt,
            category: model.category,
            image_url: model.image_url,
            content: model.content,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

/// Conversion from a draft to an insertable ActiveModel.
///
/// The id is left to the serial column; the timestamp is taken here.
impl From<PostDraft> for ActiveModel {
    fn from(draft: PostDraft) -> Self {
        Self {
            id: NotSet,
            title: Set(draft.title),
            excerpt: Set(draft.excerpt),
            category: Set(draft.category),
            image_url: Set(draft.image_url),
            content: Set(draft.content),
            created_at: Set(Utc::now().fixed_offset()),
        }
    }
}
