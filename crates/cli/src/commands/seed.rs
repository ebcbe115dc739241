//! Catalog seeding command.
//!
//! Inserts the site's fixed catalog rows: three storage unit types, six
//! services, and three membership tiers. Idempotent per table - a table
//! that already has rows is left untouched, so re-running after a partial
//! failure or on an existing database is safe.
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` - `PostgreSQL` connection string

use secrecy::SecretString;
use sqlx::PgPool;
use tracing::info;

use iron_haven_api::db::{
    self, MembershipTierRepository, ServiceRepository, StorageUnitRepository,
};
use iron_haven_api::models::{NewMembershipTier, NewService, NewStorageUnit};

/// Errors that can occur while seeding.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Repository error: {0}")]
    Repository(#[from] db::RepositoryError),
}

/// Seed the catalog tables.
///
/// # Errors
///
/// Returns `SeedError` if `DATABASE_URL` is unset or any insert fails.
pub async fn run() -> Result<(), SeedError> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("DATABASE_URL")
        .map(SecretString::from)
        .map_err(|_| SeedError::MissingEnvVar("DATABASE_URL"))?;

    info!("Connecting to database...");
    let pool = db::create_pool(&database_url).await?;

    seed_storage_units(&pool).await?;
    seed_services(&pool).await?;
    seed_membership_tiers(&pool).await?;

    info!("Seeding complete!");
    Ok(())
}

async fn seed_storage_units(pool: &PgPool) -> Result<(), SeedError> {
    let repo = StorageUnitRepository::new(pool);
    if !repo.list().await?.is_empty() {
        info!("Storage units already seeded, skipping");
        return Ok(());
    }

    for unit in storage_units() {
        repo.create(&unit).await?;
    }
    info!("Storage units seeded");
    Ok(())
}

async fn seed_services(pool: &PgPool) -> Result<(), SeedError> {
    let repo = ServiceRepository::new(pool);
    if !repo.list().await?.is_empty() {
        info!("Services already seeded, skipping");
        return Ok(());
    }

    for service in services() {
        repo.create(&service).await?;
    }
    info!("Services seeded");
    Ok(())
}

async fn seed_membership_tiers(pool: &PgPool) -> Result<(), SeedError> {
    let repo = MembershipTierRepository::new(pool);
    if !repo.list().await?.is_empty() {
        info!("Membership tiers already seeded, skipping");
        return Ok(());
    }

    for tier in membership_tiers() {
        repo.create(&tier).await?;
    }
    info!("Membership tiers seeded");
    Ok(())
}

fn features(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

fn storage_units() -> Vec<NewStorageUnit> {
    vec![
        NewStorageUnit {
            name: "Standard Unit".to_owned(),
            size: "Single bike space".to_owned(),
            price: 149,
            features: features(&[
                "24/7 Access",
                "Security cameras",
                "Battery tender hookup",
            ]),
            image_url: None,
            popular: false,
            total_units: 20,
            available_units: 12,
        },
        NewStorageUnit {
            name: "Climate Controlled".to_owned(),
            size: "Single bike space".to_owned(),
            price: 199,
            features: features(&[
                "Temperature regulated",
                "Humidity control",
                "Premium security",
                "Battery tender",
            ]),
            image_url: None,
            popular: true,
            total_units: 10,
            available_units: 5,
        },
        NewStorageUnit {
            name: "Premium Suite".to_owned(),
            size: "2-bike space".to_owned(),
            price: 349,
            features: features(&[
                "Private enclosed unit",
                "Climate controlled",
                "Work bench included",
                "Tool access",
            ]),
            image_url: None,
            popular: false,
            total_units: 5,
            available_units: 3,
        },
    ]
}

fn services() -> Vec<NewService> {
    vec![
        NewService {
            name: "Winterization Package".to_owned(),
            description: "Full prep for winter storage: fuel stabilizer, battery tender setup, \
                          tire care, and protective cover."
                .to_owned(),
            price: "From $129".to_owned(),
            icon_name: "Snowflake".to_owned(),
            popular: true,
        },
        NewService {
            name: "Oil & Filter Service".to_owned(),
            description: "Premium synthetic oil change with filter replacement. Includes \
                          21-point inspection."
                .to_owned(),
            price: "From $89".to_owned(),
            icon_name: "Droplets".to_owned(),
            popular: false,
        },
        NewService {
            name: "Tire Mount & Balance".to_owned(),
            description: "Professional tire mounting and dynamic balancing. We can source \
                          tires or use yours."
                .to_owned(),
            price: "From $75/wheel".to_owned(),
            icon_name: "CircleDot".to_owned(),
            popular: false,
        },
        NewService {
            name: "Full Service".to_owned(),
            description: "Complete maintenance package: oil, brakes, chain, fluids, and \
                          comprehensive inspection."
                .to_owned(),
            price: "From $299".to_owned(),
            icon_name: "Wrench".to_owned(),
            popular: false,
        },
        NewService {
            name: "Spring Ready Package".to_owned(),
            description: "De-winterization, battery check, fluid top-up, and safety \
                          inspection to get you road-ready."
                .to_owned(),
            price: "From $149".to_owned(),
            icon_name: "Gauge".to_owned(),
            popular: false,
        },
        NewService {
            name: "Custom Work".to_owned(),
            description: "Accessory installation, custom modifications, and specialty work. \
                          Get a quote for your project."
                .to_owned(),
            price: "Quote".to_owned(),
            icon_name: "Settings".to_owned(),
            popular: false,
        },
    ]
}

fn membership_tiers() -> Vec<NewMembershipTier> {
    vec![
        NewMembershipTier {
            name: "Rider".to_owned(),
            price: 0,
            description: "Access to community events and basic perks".to_owned(),
            features: features(&[
                "Community event access",
                "Member newsletter",
                "10% off merchandise",
            ]),
            popular: false,
            cta_text: "Join Free".to_owned(),
        },
        NewMembershipTier {
            name: "Club Member".to_owned(),
            price: 49,
            description: "Full access to storage discounts and priority service".to_owned(),
            features: features(&[
                "Community event access",
                "Member newsletter",
                "15% off merchandise",
                "10% storage discount",
                "Priority booking",
                "Free annual inspection",
            ]),
            popular: true,
            cta_text: "Get Started".to_owned(),
        },
        NewMembershipTier {
            name: "VIP".to_owned(),
            price: 99,
            description: "The ultimate rider experience with exclusive perks".to_owned(),
            features: features(&[
                "Community event access",
                "Member newsletter",
                "20% off merchandise",
                "15% storage discount",
                "Priority booking",
                "Free annual inspection",
                "Garage workspace access",
            ]),
            popular: false,
            cta_text: "Go VIP".to_owned(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_shapes() {
        assert_eq!(storage_units().len(), 3);
        assert_eq!(services().len(), 6);
        assert_eq!(membership_tiers().len(), 3);
    }

    #[test]
    fn test_availability_never_exceeds_total() {
        for unit in storage_units() {
            assert!(unit.available_units <= unit.total_units, "{}", unit.name);
            assert!(unit.available_units >= 0, "{}", unit.name);
        }
    }

    #[test]
    fn test_exactly_one_popular_per_catalog() {
        assert_eq!(storage_units().iter().filter(|u| u.popular).count(), 1);
        assert_eq!(services().iter().filter(|s| s.popular).count(), 1);
        assert_eq!(membership_tiers().iter().filter(|t| t.popular).count(), 1);
    }

    #[test]
    fn test_free_tier_exists() {
        let tiers = membership_tiers();
        let rider = tiers.iter().find(|t| t.name == "Rider").expect("Rider tier");
        assert_eq!(rider.price, 0);
        assert_eq!(rider.cta_text, "Join Free");
    }
}
