//! Tweet database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::Tweet;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tweets")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub author_id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    /// Parent tweet for replies (NULL = top-level tweet)
    pub reply_to_id: Option<Uuid>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::AuthorId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    Author,
    #[sea_orm(has_many = "super::like::Entity")]
    Likes,
}

impl Related<super::like::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Likes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Tweet {
    fn from(model: Model) -> Self {
        Tweet {
            id: model.id,
            author_id: model.author_id,
            content: model.content,
            reply_to_id: model.reply_to_id,
            created_at: model.created_at,
        }
    }
}
