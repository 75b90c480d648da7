use database::Identifiable;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "villas")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub details: String,
    #[sea_orm(column_type = "Double")]
    pub rate: f64,
    pub sqft: i32,
    pub occupancy: i32,
    pub image_url: String,
    pub amenity: String,
    pub created_date: DateTimeWithTimeZone,
    pub updated_date: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::villa_number::Entity")]
    VillaNumbers,
}

impl Related<super::villa_number::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VillaNumbers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Identifiable for Model {
    fn id(&self) -> i32 {
        self.id
    }

    fn set_id(&mut self, id: i32) {
        self.id = id;
    }
}
