use crate::companies::companies_model::{Company, CompanyChangeset, NewCompany};
use crate::companies::companies_traits::CompanyRepositoryTrait;
use crate::db::{get_connection, WriteHandle};
use crate::errors::Result;
use crate::schema::companies;
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

pub struct CompanyRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl CompanyRepository {
    pub fn new(
        pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        CompanyRepository { pool, writer }
    }
}

#[async_trait]
impl CompanyRepositoryTrait for CompanyRepository {
    fn list_companies(&self) -> Result<Vec<Company>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(companies::table
            .order(companies::name.asc())
            .load::<Company>(&mut conn)?)
    }

    fn get_company_by_id(&self, id: &str) -> Result<Option<Company>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(companies::table
            .find(id)
            .first::<Company>(&mut conn)
            .optional()?)
    }

    fn find_by_tax_id(&self, tax_id: &str) -> Result<Option<Company>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(companies::table
            .filter(companies::tax_id.eq(tax_id))
            .first::<Company>(&mut conn)
            .optional()?)
    }

    async fn insert_company(&self, new_company: NewCompany) -> Result<Company> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Company> {
                let mut company = new_company;
                let id = company
                    .id
                    .take()
                    .unwrap_or_else(|| Uuid::new_v4().to_string());
                company.id = Some(id.clone());

                diesel::insert_into(companies::table)
                    .values(&company)
                    .execute(conn)?;

                Ok(companies::table.find(&id).first::<Company>(conn)?)
            })
            .await
    }

    async fn update_company(&self, id: &str, changes: CompanyChangeset) -> Result<Company> {
        let id_owned = id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Company> {
                diesel::update(companies::table.find(&id_owned))
                    .set(&changes)
                    .execute(conn)?;

                Ok(companies::table
                    .find(&id_owned)
                    .first::<Company>(conn)?)
            })
            .await
    }

    async fn delete_company(&self, id: &str) -> Result<usize> {
        let id_owned = id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(companies::table.find(&id_owned)).execute(conn)?)
            })
            .await
    }
}
