//! Demo walkthrough: four users, one restaurant, one order from checkout to OTP-confirmed
//! delivery.
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

use dishpatch::auth::{Session, SignUp};
use dishpatch::lifecycle::{setup_tracing, FoodSystem};
use dishpatch::model::{CouponCreate, DishForm, PaymentMethod, RestaurantCreate, Role};
use dishpatch::views::{AdminView, CustomerView, DeliveryView, RestaurantView};
use std::error::Error;
use tracing::{error, info, Instrument};

fn form(email: &str, full_name: &str, role: Role) -> SignUp {
    SignUp {
        email: email.to_string(),
        password: "password123".to_string(),
        full_name: full_name.to_string(),
        phone: None,
        role,
    }
}

fn dish(name: &str, price: f64, category: &str) -> DishForm {
    DishForm {
        name: name.to_string(),
        price: Some(price),
        category: category.to_string(),
        is_available: true,
        ..DishForm::default()
    }
}

async fn sign_up(system: &FoodSystem, form: SignUp) -> Result<Session, Box<dyn Error>> {
    let provider = system.session_provider();
    Ok(provider.sign_up(form).await?)
}

async fn walkthrough(system: &FoodSystem) -> Result<(), Box<dyn Error>> {
    let backend = system.backend();

    let span = tracing::info_span!("sign_up");
    let (alice, bob, dev, root) = async {
        info!("Creating one user per role");
        Ok::<_, Box<dyn Error>>((
            sign_up(system, form("alice@example.com", "Alice", Role::Customer)).await?,
            sign_up(system, form("bob@example.com", "Bob", Role::Restaurant)).await?,
            sign_up(system, form("dev@example.com", "Dev", Role::DeliveryAgent)).await?,
            sign_up(system, form("root@example.com", "Root", Role::Admin)).await?,
        ))
    }
    .instrument(span)
    .await?;

    let mut kitchen = RestaurantView::open(bob, backend.clone()).await?;
    let owner_id = kitchen.session().user_id;
    let span = tracing::info_span!("menu_setup");
    async {
        kitchen
            .register(RestaurantCreate {
                owner_id,
                name: "Dosa Corner".to_string(),
                description: Some("South Indian breakfast all day".to_string()),
                address: "4 MG Road".to_string(),
                phone: "080-5550100".to_string(),
                image_url: None,
                cuisine_type: Some("South Indian".to_string()),
            })
            .await?;
        kitchen.add_dish(dish("Masala Dosa", 100.0, "Dosa")).await?;
        kitchen.add_dish(dish("Medu Vada", 50.0, "Snacks")).await?;
        backend
            .coupons
            .create_coupon(CouponCreate::percentage("START10", 10.0, Some(20.0)))
            .await?;
        Ok::<_, Box<dyn Error>>(())
    }
    .instrument(span)
    .await?;

    let mut customer = CustomerView::open(alice, backend.clone()).await?;
    let span = tracing::info_span!("checkout");
    let order = async {
        let restaurant = customer
            .browse(Some("dosa"), None)
            .await?
            .into_iter()
            .next()
            .ok_or("restaurant not listed")?;
        let menu = customer.menu(restaurant.id).await?;
        for dish in &menu.dishes {
            customer.cart_mut().add(dish);
            if dish.name == "Masala Dosa" {
                customer.cart_mut().add(dish);
            }
        }
        let quote = customer.apply_coupon("start10").await?;
        info!(subtotal = quote.subtotal, discount = quote.discount, total = quote.final_amount, "Quoted");
        Ok::<_, Box<dyn Error>>(customer.place_order("221B Residency Road", PaymentMethod::Card).await?)
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("kitchen");
    async {
        kitchen.sync().await?;
        kitchen.accept(order.id).await?;
        kitchen.start_preparing(order.id).await?;
        kitchen.mark_ready(order.id).await?;
        Ok::<_, Box<dyn Error>>(())
    }
    .instrument(span)
    .await?;

    let mut rider = DeliveryView::open(dev, backend.clone()).await?;
    let span = tracing::info_span!("delivery");
    let otp = async {
        info!(available = rider.available().len(), "Ready for pickup");
        rider.claim(order.id).await?;
        rider.sync().await?;
        Ok::<_, Box<dyn Error>>(rider.otp_for(order.id).ok_or("no delivery code")?)
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("handover");
    let delivered = customer
        .confirm_delivery(order.id, &otp)
        .instrument(span)
        .await?;
    info!(order_id = %delivered.id, status = %delivered.status, "Order complete");

    let mut admin = AdminView::open(root, backend).await?;
    admin.sync().await?;
    let stats = admin.stats().await?;
    info!(
        orders = stats.total_orders,
        revenue = stats.total_revenue,
        customers = stats.total_customers,
        restaurants = stats.total_restaurants,
        "Platform totals"
    );
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), String> {
    let _ = dotenvy::dotenv();
    setup_tracing();

    info!("Starting dishpatch demo");
    let system = FoodSystem::new();

    if let Err(e) = walkthrough(&system).await {
        error!(error = %e, "Walkthrough failed");
    }

    system.shutdown().await?;
    info!("Demo completed");
    Ok(())
}
