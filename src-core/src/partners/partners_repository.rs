use crate::db::{get_connection, WriteHandle};
use crate::errors::Result;
use crate::partners::partners_model::{
    Customer, CustomerChangeset, NewCustomer, NewSupplier, Supplier, SupplierChangeset,
};
use crate::partners::partners_traits::PartnerRepositoryTrait;
use crate::schema::{accounts_payable, accounts_receivable, customers, suppliers};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

pub struct PartnerRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl PartnerRepository {
    pub fn new(
        pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        PartnerRepository { pool, writer }
    }
}

#[async_trait]
impl PartnerRepositoryTrait for PartnerRepository {
    fn list_suppliers(&self) -> Result<Vec<Supplier>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(suppliers::table
            .order(suppliers::name.asc())
            .load::<Supplier>(&mut conn)?)
    }

    fn get_supplier_by_id(&self, id: &str) -> Result<Option<Supplier>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(suppliers::table
            .find(id)
            .first::<Supplier>(&mut conn)
            .optional()?)
    }

    fn find_supplier_by_tax_id(&self, tax_id: &str) -> Result<Option<Supplier>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(suppliers::table
            .filter(suppliers::tax_id.eq(tax_id))
            .first::<Supplier>(&mut conn)
            .optional()?)
    }

    fn supplier_has_entries(&self, id: &str) -> Result<bool> {
        let mut conn = get_connection(&self.pool)?;
        let count: i64 = accounts_payable::table
            .filter(accounts_payable::supplier_id.eq(id))
            .count()
            .get_result(&mut conn)?;
        Ok(count > 0)
    }

    async fn insert_supplier(&self, new_supplier: NewSupplier) -> Result<Supplier> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Supplier> {
                let mut supplier = new_supplier;
                let id = supplier
                    .id
                    .take()
                    .unwrap_or_else(|| Uuid::new_v4().to_string());
                supplier.id = Some(id.clone());

                diesel::insert_into(suppliers::table)
                    .values(&supplier)
                    .execute(conn)?;

                Ok(suppliers::table.find(&id).first::<Supplier>(conn)?)
            })
            .await
    }

    async fn update_supplier(&self, id: &str, changes: SupplierChangeset) -> Result<Supplier> {
        let id_owned = id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Supplier> {
                diesel::update(suppliers::table.find(&id_owned))
                    .set(&changes)
                    .execute(conn)?;

                Ok(suppliers::table
                    .find(&id_owned)
                    .first::<Supplier>(conn)?)
            })
            .await
    }

    async fn delete_supplier(&self, id: &str) -> Result<usize> {
        let id_owned = id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(suppliers::table.find(&id_owned)).execute(conn)?)
            })
            .await
    }

    fn list_customers(&self) -> Result<Vec<Customer>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(customers::table
            .order(customers::name.asc())
            .load::<Customer>(&mut conn)?)
    }

    fn get_customer_by_id(&self, id: &str) -> Result<Option<Customer>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(customers::table
            .find(id)
            .first::<Customer>(&mut conn)
            .optional()?)
    }

    fn find_customer_by_tax_id(&self, tax_id: &str) -> Result<Option<Customer>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(customers::table
            .filter(customers::tax_id.eq(tax_id))
            .first::<Customer>(&mut conn)
            .optional()?)
    }

    fn customer_has_entries(&self, id: &str) -> Result<bool> {
        let mut conn = get_connection(&self.pool)?;
        let count: i64 = accounts_receivable::table
            .filter(accounts_receivable::customer_id.eq(id))
            .count()
            .get_result(&mut conn)?;
        Ok(count > 0)
    }

    async fn insert_customer(&self, new_customer: NewCustomer) -> Result<Customer> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Customer> {
                let mut customer = new_customer;
                let id = customer
                    .id
                    .take()
                    .unwrap_or_else(|| Uuid::new_v4().to_string());
                customer.id = Some(id.clone());

                diesel::insert_into(customers::table)
                    .values(&customer)
                    .execute(conn)?;

                Ok(customers::table.find(&id).first::<Customer>(conn)?)
            })
            .await
    }

    async fn update_customer(&self, id: &str, changes: CustomerChangeset) -> Result<Customer> {
        let id_owned = id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Customer> {
                diesel::update(customers::table.find(&id_owned))
                    .set(&changes)
                    .execute(conn)?;

                Ok(customers::table
                    .find(&id_owned)
                    .first::<Customer>(conn)?)
            })
            .await
    }

    async fn delete_customer(&self, id: &str) -> Result<usize> {
        let id_owned = id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(customers::table.find(&id_owned)).execute(conn)?)
            })
            .await
    }
}
