use async_trait::async_trait;
use geo_dns_cache_application::ports::UpstreamDirectory;
use geo_dns_cache_domain::{DomainError, GeoPoint, UpstreamServer};
use sqlx::SqlitePool;
use std::net::IpAddr;
use tracing::{debug, error, instrument};

type ServerRow = (String, i64, f64, f64, i64);

/// Upstream directory stored in SQLite.
///
/// The directory is small (one row per configured resolver), so nearest
/// selection loads every row and ranks them in memory.
pub struct SqliteUpstreamDirectory {
    pool: SqlitePool,
}

impl SqliteUpstreamDirectory {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_server(row: ServerRow) -> Result<UpstreamServer, DomainError> {
        let (address, port, longitude, latitude, ranking) = row;

        let address: IpAddr = address
            .parse()
            .map_err(|_| DomainError::InvalidIpAddress(address.clone()))?;
        let port = u16::try_from(port)
            .map_err(|_| DomainError::DatabaseError(format!("invalid port {} for {}", port, address)))?;

        Ok(UpstreamServer::new(
            address,
            port,
            GeoPoint::new(longitude, latitude),
            ranking,
        ))
    }

    async fn load_all(&self) -> Result<Vec<UpstreamServer>, DomainError> {
        let rows = sqlx::query_as::<_, ServerRow>(
            "SELECT address, port, longitude, latitude, ranking
             FROM upstream_servers
             ORDER BY ranking ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to load upstream servers");
            DomainError::DatabaseError(e.to_string())
        })?;

        rows.into_iter().map(Self::row_to_server).collect()
    }
}

#[async_trait]
impl UpstreamDirectory for SqliteUpstreamDirectory {
    #[instrument(skip(self))]
    async fn upsert(&self, server: &UpstreamServer) -> Result<(), DomainError> {
        let now = chrono::Utc::now().timestamp_millis();

        sqlx::query(
            "INSERT INTO upstream_servers (address, port, longitude, latitude, ranking, updated_at)
             VALUES (?, ?, ?, ?, ?, ?)
             ON CONFLICT(address) DO UPDATE SET
                port = excluded.port,
                longitude = excluded.longitude,
                latitude = excluded.latitude,
                ranking = excluded.ranking,
                updated_at = excluded.updated_at",
        )
        .bind(server.address.to_string())
        .bind(server.port as i64)
        .bind(server.location.longitude)
        .bind(server.location.latitude)
        .bind(server.rank)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, address = %server.address, "Failed to upsert upstream server");
            DomainError::DatabaseError(e.to_string())
        })?;

        debug!(address = %server.address, rank = server.rank, "Upstream server upserted");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn nearest(&self, point: Option<GeoPoint>) -> Result<Option<UpstreamServer>, DomainError> {
        let servers = self.load_all().await?;
        Ok(UpstreamServer::select_nearest(&servers, point.as_ref()).cloned())
    }

    #[instrument(skip(self))]
    async fn count(&self) -> Result<u64, DomainError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM upstream_servers")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to count upstream servers");
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(count.0 as u64)
    }

    #[instrument(skip(self))]
    async fn all(&self) -> Result<Vec<UpstreamServer>, DomainError> {
        self.load_all().await
    }
}
