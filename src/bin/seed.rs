use agri_storefront::{
    config::AppConfig,
    dto::{auth::SignupRequest, listings::CreateListingRequest},
    services::{auth_service, listing_service},
    state::AppState,
    store::open_store,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;
    let store = open_store(&config).await?;
    let state = AppState::new(store).await;

    let user = auth_service::signup(
        &state,
        SignupRequest {
            name: "Demo Farmer".into(),
            email: "farmer@example.com".into(),
            password: "harvest123".into(),
            confirm_password: "harvest123".into(),
        },
    )
    .await?
    .data
    .ok_or_else(|| anyhow::anyhow!("signup returned no user"))?;
    println!("Signed in demo user {} ({})", user.name, user.id);

    seed_listings(&state, &user).await?;
    Ok(())
}

async fn seed_listings(
    state: &AppState,
    user: &agri_storefront::models::User,
) -> anyhow::Result<()> {
    let listings = vec![
        ("Basmati Rice", "Aromatic long-grain rice, sun dried", "Grains", 500, 120, (2026, 9, 20), "Premium"),
        ("Red Onions", "Firm onions, sorted and bagged", "Vegetables", 300, 35, (2026, 9, 28), "Standard"),
        ("Alphonso Mangoes", "Hand-picked, naturally ripened", "Fruits", 80, 450, (2026, 5, 14), "Grade A"),
    ];

    for (name, description, category, quantity, price, (y, m, d), quality) in listings {
        let harvest_date = NaiveDate::from_ymd_opt(y, m, d)
            .ok_or_else(|| anyhow::anyhow!("invalid harvest date for {name}"))?;
        listing_service::create_listing(
            state,
            user,
            CreateListingRequest {
                name: name.into(),
                description: description.into(),
                category: category.into(),
                quantity,
                price: Decimal::from(price),
                harvest_date,
                quality: Some(quality.into()),
                location: "Nashik, Maharashtra".into(),
                photos: vec![format!("/uploads/{}.jpg", name.to_lowercase().replace(' ', "-"))],
            },
        )
        .await?;
    }

    println!("Seeded crop listings");
    Ok(())
}
