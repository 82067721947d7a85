//! Product catalog collaborator with snapshot caching.
//!
//! Snapshots are cached for five minutes. A product record missing its
//! price or carrying an out-of-range discount is rejected - a cart line is
//! never silently priced at zero.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache;
use rust_decimal::Decimal;
use serde::Deserialize;

use tajicart_core::{DiscountPercent, Money, ProductId};
use tajicart_pricing::ProductSnapshot;

use super::{CollaboratorError, PlatformClient};

const CACHE_CAPACITY: u64 = 1000;
const CACHE_TTL: Duration = Duration::from_secs(300); // 5 minutes

/// Product snapshot lookup.
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Fetch a validated snapshot for a product.
    async fn snapshot(&self, product_id: &ProductId) -> Result<ProductSnapshot, CollaboratorError>;
}

/// Wire shape of a catalog product. Price and discount are optional here so
/// an incomplete upstream record fails validation instead of deserialization,
/// with a message naming the product.
#[derive(Debug, Deserialize)]
struct ProductDto {
    price: Option<Decimal>,
    #[serde(default)]
    discount: Option<Decimal>,
    #[serde(default)]
    stock: Option<u32>,
}

fn snapshot_from_dto(
    product_id: &ProductId,
    dto: ProductDto,
) -> Result<ProductSnapshot, CollaboratorError> {
    let price = dto
        .price
        .ok_or_else(|| CollaboratorError::InvalidPayload(format!("{product_id}: missing price")))?;
    let price = Money::new(price)
        .map_err(|e| CollaboratorError::InvalidPayload(format!("{product_id}: {e}")))?;
    let discount = DiscountPercent::new(dto.discount.unwrap_or_default())
        .map_err(|e| CollaboratorError::InvalidPayload(format!("{product_id}: {e}")))?;

    ProductSnapshot::new(
        product_id.clone(),
        price,
        discount,
        dto.stock.unwrap_or_default(),
    )
    .map_err(|e| CollaboratorError::InvalidPayload(e.to_string()))
}

/// HTTP-backed catalog lookup with a moka cache.
#[derive(Clone)]
pub struct HttpCatalogService {
    client: Arc<PlatformClient>,
    cache: Cache<ProductId, ProductSnapshot>,
}

impl HttpCatalogService {
    #[must_use]
    pub fn new(client: Arc<PlatformClient>) -> Self {
        let cache = Cache::builder()
            .max_capacity(CACHE_CAPACITY)
            .time_to_live(CACHE_TTL)
            .build();
        Self { client, cache }
    }
}

#[async_trait]
impl CatalogService for HttpCatalogService {
    async fn snapshot(&self, product_id: &ProductId) -> Result<ProductSnapshot, CollaboratorError> {
        if let Some(snapshot) = self.cache.get(product_id).await {
            return Ok(snapshot);
        }

        let dto: ProductDto = self
            .client
            .get_json(&format!("/api/products/{product_id}"))
            .await?;
        let snapshot = snapshot_from_dto(product_id, dto)?;

        self.cache
            .insert(product_id.clone(), snapshot.clone())
            .await;
        Ok(snapshot)
    }
}
