mod error;
mod models;
mod schema;

pub use error::Error;
pub use models::{FtMintRow, TransferRow, WithdrawCropRow};

use croplog_records::{Record, RecordKind, Store};
use diesel::{
    prelude::*,
    r2d2::{ConnectionManager, Pool},
    PgConnection,
};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

pub type Result<T> = std::result::Result<T, Error>;
pub type DbPool = Pool<ConnectionManager<PgConnection>>;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Postgres backed [`Store`]. Each record kind has its own table keyed by
/// receipt id; writes upsert.
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn connect(url: &str) -> Result<Self> {
        let manager = ConnectionManager::<PgConnection>::new(url);
        let pool = Pool::builder().build(manager)?;

        let mut conn = pool.get()?;
        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(Error::Migration)?;
        log::info!("Applied {} pending migrations", applied.len());
        Ok(Self { pool })
    }
}

impl Store for PgStore {
    type Error = Error;

    fn put(&self, kind: RecordKind, key: &str, record: &Record) -> Result<()> {
        debug_assert_eq!(kind, record.kind());
        let mut conn = self.pool.get()?;

        match record {
            Record::WithdrawCrop(record) => {
                use schema::withdraw_crops;

                let row = WithdrawCropRow::new(key, record)?;
                diesel::insert_into(withdraw_crops::table)
                    .values(&row)
                    .on_conflict(withdraw_crops::id)
                    .do_update()
                    .set(&row)
                    .execute(&mut conn)?;
            }
            Record::FtMint(record) => {
                use schema::ft_mints;

                let row = FtMintRow::new(key, record)?;
                diesel::insert_into(ft_mints::table)
                    .values(&row)
                    .on_conflict(ft_mints::id)
                    .do_update()
                    .set(&row)
                    .execute(&mut conn)?;
            }
            Record::Transfer(record) => {
                use schema::transfers;

                let row = TransferRow::new(key, record)?;
                diesel::insert_into(transfers::table)
                    .values(&row)
                    .on_conflict(transfers::id)
                    .do_update()
                    .set(&row)
                    .execute(&mut conn)?;
            }
        }
        Ok(())
    }
}
