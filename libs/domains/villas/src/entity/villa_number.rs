use database::Identifiable;
use sea_orm::entity::prelude::*;

/// A bookable unit of a villa, keyed by its caller-assigned number.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "villa_numbers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub villa_no: i32,
    pub villa_id: i32,
    pub special_details: String,
    pub created_date: DateTimeWithTimeZone,
    pub updated_date: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::villa::Entity",
        from = "Column::VillaId",
        to = "super::villa::Column::Id",
        on_delete = "Cascade"
    )]
    Villa,
}

impl Related<super::villa::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Villa.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Identifiable for Model {
    fn id(&self) -> i32 {
        self.villa_no
    }

    fn set_id(&mut self, id: i32) {
        self.villa_no = id;
    }
}
