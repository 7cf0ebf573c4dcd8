//! Like entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

use board_core::domain::{Like, UNSAVED_ID};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "likes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub post_id: i64,
    pub created_by: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::post::Entity",
        from = "Column::PostId",
        to = "super::post::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Post,
}

impl Related<super::post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Post.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Like {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            post_id: model.post_id,
            created_by: model.created_by,
            created_at: model.created_at.into(),
        }
    }
}

impl From<Like> for ActiveModel {
    fn from(like: Like) -> Self {
        Self {
            id: if like.id == UNSAVED_ID {
                NotSet
            } else {
                Set(like.id)
            },
            post_id: Set(like.post_id),
            created_by: Set(like.created_by),
            created_at: Set(like.created_at.into()),
        }
    }
}
