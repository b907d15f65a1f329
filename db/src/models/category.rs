use std::collections::BTreeMap;

use diesel::{ExpressionMethods, PgConnection, QueryDsl, RunQueryDsl};
use serde::{Deserialize, Serialize};

use errors::Error;

#[derive(Clone, Debug, Deserialize, PartialEq, Queryable, Serialize)]
pub struct Category {
    pub id: i32,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Category id -> display name, the shape every listing endpoint returns.
pub type CategoryMap = BTreeMap<i32, String>;

impl Category {
    pub fn get_all(conn: &PgConnection) -> Result<Vec<Category>, Error> {
        use crate::schema::categories::dsl::{categories, id};

        let results = categories.order(id.asc()).load::<Category>(conn)?;

        Ok(results)
    }

    pub fn get_all_by_type(conn: &PgConnection) -> Result<Vec<Category>, Error> {
        use crate::schema::categories::dsl::{categories, type_};

        let results = categories.order(type_.asc()).load::<Category>(conn)?;

        Ok(results)
    }

    pub fn find_by_id(conn: &PgConnection, category_id: i32) -> Result<Category, Error> {
        use crate::schema::categories::dsl::categories;

        let category = categories.find(category_id).first::<Category>(conn)?;

        Ok(category)
    }

    pub fn to_map(categories: &[Category]) -> CategoryMap {
        categories
            .iter()
            .map(|category| (category.id, category.kind.clone()))
            .collect()
    }
}
