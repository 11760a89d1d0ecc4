use dishpatch::auth::{AuthError, Session, SessionState, SignUp};
use dishpatch::config::SystemConfig;
use dishpatch::dish_actor::DishError;
use dishpatch::error::ValidationError;
use dishpatch::framework::{DomainClient, Feed};
use dishpatch::lifecycle::{Backend, FoodSystem};
use dishpatch::model::{
    CouponCreate, Dish, DishForm, OrderStatus, PaymentMethod, PaymentStatus, RestaurantCreate,
    Role,
};
use dishpatch::order_actor::OrderError;
use dishpatch::restaurant_actor::RestaurantError;
use dishpatch::views::{
    AdminView, CustomerView, Dashboard, DeliveryView, RestaurantView, ViewError,
};

fn system() -> FoodSystem {
    FoodSystem::with_config(SystemConfig::default())
}

async fn user(system: &FoodSystem, email: &str, role: Role) -> Session {
    system
        .session_provider()
        .sign_up(SignUp {
            email: email.to_string(),
            password: "password123".to_string(),
            full_name: email.split('@').next().unwrap_or("user").to_string(),
            phone: None,
            role,
        })
        .await
        .expect("sign up failed")
}

fn dish_form(name: &str, price: f64, category: &str) -> DishForm {
    DishForm {
        name: name.to_string(),
        price: Some(price),
        category: category.to_string(),
        is_available: true,
        ..DishForm::default()
    }
}

/// A registered restaurant with a dosa at 100 and a vada at 50.
async fn kitchen(system: &FoodSystem, email: &str) -> (RestaurantView, Dish, Dish) {
    let owner = user(system, email, Role::Restaurant).await;
    let mut view = RestaurantView::open(owner.clone(), system.backend()).await.unwrap();
    view.register(RestaurantCreate {
        owner_id: owner.user_id,
        name: format!("Kitchen {email}"),
        description: None,
        address: "4 MG Road".into(),
        phone: "080-5550100".into(),
        image_url: None,
        cuisine_type: Some("South Indian".into()),
    })
    .await
    .unwrap();
    let dosa = view.add_dish(dish_form("Masala Dosa", 100.0, "Dosa")).await.unwrap();
    let vada = view.add_dish(dish_form("Medu Vada", 50.0, "Snacks")).await.unwrap();
    (view, dosa, vada)
}

async fn customer(system: &FoodSystem, email: &str) -> CustomerView {
    let session = user(system, email, Role::Customer).await;
    CustomerView::open(session, system.backend()).await.unwrap()
}

async fn rider(system: &FoodSystem, email: &str) -> DeliveryView {
    let session = user(system, email, Role::DeliveryAgent).await;
    DeliveryView::open(session, system.backend()).await.unwrap()
}

async fn create_coupon(backend: &Backend, coupon: CouponCreate) {
    backend.coupons.create_coupon(coupon).await.unwrap();
}

#[tokio::test]
async fn test_order_lifecycle_end_to_end() {
    let system = system();
    let backend = system.backend();
    create_coupon(&backend, CouponCreate::percentage("START10", 10.0, Some(20.0))).await;

    let (mut kitchen, dosa, vada) = kitchen(&system, "bob@example.com").await;
    let mut alice = customer(&system, "alice@example.com").await;
    let mut dev = rider(&system, "dev@example.com").await;

    // checkout: 2 x 100 + 1 x 50, START10 capped at 20
    alice.cart_mut().add(&dosa);
    alice.cart_mut().add(&dosa);
    alice.cart_mut().add(&vada);
    let quote = alice.apply_coupon("start10").await.unwrap();
    assert_eq!((quote.subtotal, quote.discount, quote.final_amount), (250.0, 20.0, 230.0));

    let order = alice
        .place_order("221B Residency Road", PaymentMethod::Card)
        .await
        .unwrap();
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.payment_status, PaymentStatus::Completed);
    assert_eq!(order.final_amount, 230.0);
    assert!(alice.cart().is_empty());

    // readable straight after placement, before the view syncs
    assert!(alice.order(order.id).is_none());
    let items = alice.order_items(order.id).await.unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items.iter().map(|i| i.line_total()).sum::<f64>(), 250.0);

    // kitchen
    kitchen.sync().await.unwrap();
    assert_eq!(kitchen.orders().len(), 1);
    kitchen.accept(order.id).await.unwrap();
    kitchen.start_preparing(order.id).await.unwrap();
    assert!(dev.available().is_empty());
    kitchen.mark_ready(order.id).await.unwrap();

    // delivery
    dev.sync().await.unwrap();
    assert_eq!(dev.available().len(), 1);
    let claimed = dev.claim(order.id).await.unwrap();
    assert_eq!(claimed.status, OrderStatus::PickedUp);
    dev.sync().await.unwrap();
    assert!(dev.available().is_empty());
    assert_eq!(dev.active().len(), 1);
    let otp = dev.otp_for(order.id).unwrap();
    let code: u32 = otp.parse().unwrap();
    assert!((100_000..=999_999).contains(&code));

    let history = dev.tracking(order.id).await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].status, OrderStatus::PickedUp);

    // handover: wrong code first
    let err = alice.confirm_delivery(order.id, "").await.unwrap_err();
    assert_eq!(err.to_string(), "Please enter OTP");
    let wrong = if otp == "123456" { "654321" } else { "123456" };
    let err = alice.confirm_delivery(order.id, wrong).await.unwrap_err();
    assert_eq!(err.validation(), Some(&ValidationError::OtpMismatch));
    let padded = format!(" {otp} ");
    let err = alice.confirm_delivery(order.id, &padded).await.unwrap_err();
    assert_eq!(err.validation(), Some(&ValidationError::OtpMismatch));
    let still = backend.orders.get(order.id).await.unwrap().unwrap();
    assert_eq!(still.status, OrderStatus::PickedUp);
    assert!(still.otp_verified_at.is_none());

    let delivered = alice.confirm_delivery(order.id, &otp).await.unwrap();
    assert_eq!(delivered.status, OrderStatus::Delivered);
    assert!(delivered.otp_verified_at.is_some());

    alice.sync().await.unwrap();
    assert_eq!(alice.order(order.id).unwrap().status, OrderStatus::Delivered);
    dev.sync().await.unwrap();
    assert!(dev.active().is_empty());
    assert_eq!(dev.completed().len(), 1);
}

#[tokio::test]
async fn test_fixed_coupon_can_make_total_negative() {
    let system = system();
    create_coupon(&system.backend(), CouponCreate::fixed("FLAT100", 100.0).min_order(50.0)).await;
    let (kitchen, _, _) = kitchen(&system, "owner@example.com").await;
    let mut alice = customer(&system, "alice@example.com").await;

    let cheap = kitchen
        .add_dish(dish_form("Filter Coffee", 40.0, "Drinks"))
        .await
        .unwrap();
    alice.cart_mut().add(&cheap);
    alice.cart_mut().add(&cheap);

    let quote = alice.apply_coupon("FLAT100").await.unwrap();
    assert_eq!((quote.subtotal, quote.discount, quote.final_amount), (80.0, 100.0, -20.0));

    let order = alice.place_order("12 Park Street", PaymentMethod::Cash).await.unwrap();
    assert_eq!(order.final_amount, -20.0);
    assert_eq!(order.final_amount, order.total_amount - order.discount_amount);
}

#[tokio::test]
async fn test_coupon_rejections() {
    let system = system();
    let backend = system.backend();
    create_coupon(&backend, CouponCreate::fixed("BIG", 30.0).min_order(500.0)).await;
    let mut off = CouponCreate::fixed("OFF", 10.0);
    off.is_active = false;
    create_coupon(&backend, off).await;

    let (_kitchen, dosa, _) = kitchen(&system, "owner@example.com").await;
    let mut alice = customer(&system, "alice@example.com").await;
    alice.cart_mut().add(&dosa);

    let err = alice.apply_coupon("BIG").await.unwrap_err();
    assert_eq!(err.to_string(), "Minimum order amount of ₹500 required");

    for code in ["OFF", "NOPE"] {
        let err = alice.apply_coupon(code).await.unwrap_err();
        assert_eq!(err.validation(), Some(&ValidationError::InvalidCoupon));
    }
    assert!(alice.applied_coupon().is_none());
    assert_eq!(alice.quote().unwrap().discount, 0.0);
}

#[tokio::test]
async fn test_checkout_validation() {
    let system = system();
    let (_kitchen, dosa, _) = kitchen(&system, "owner@example.com").await;
    let mut alice = customer(&system, "alice@example.com").await;

    let err = alice.place_order("12 Park Street", PaymentMethod::Card).await.unwrap_err();
    assert_eq!(err.validation(), Some(&ValidationError::EmptyCart));

    alice.cart_mut().add(&dosa);
    let err = alice.place_order("   ", PaymentMethod::Card).await.unwrap_err();
    assert_eq!(err.to_string(), "Please enter delivery address");
    assert!(!alice.cart().is_empty());
}

#[tokio::test]
async fn test_second_claim_is_rejected() {
    let system = system();
    let (kitchen, dosa, _) = kitchen(&system, "owner@example.com").await;
    let mut alice = customer(&system, "alice@example.com").await;
    let mut first = rider(&system, "first@example.com").await;
    let mut second = rider(&system, "second@example.com").await;

    alice.cart_mut().add(&dosa);
    let order = alice.place_order("12 Park Street", PaymentMethod::Card).await.unwrap();
    kitchen.accept(order.id).await.unwrap();
    kitchen.start_preparing(order.id).await.unwrap();
    kitchen.mark_ready(order.id).await.unwrap();

    second.sync().await.unwrap();
    assert_eq!(second.available().len(), 1);

    first.claim(order.id).await.unwrap();
    let err = second.claim(order.id).await.unwrap_err();
    assert!(
        matches!(
            err,
            ViewError::Order(OrderError::InvalidTransition {
                from: OrderStatus::PickedUp,
                to: OrderStatus::PickedUp
            })
        ),
        "got {err:?}"
    );

    // the order left the second agent's slice
    second.sync().await.unwrap();
    assert!(second.available().is_empty());
    assert!(second.otp_for(order.id).is_none());
    first.sync().await.unwrap();
    assert!(first.otp_for(order.id).is_some());
}

#[tokio::test]
async fn test_racing_claims_have_one_winner() {
    let system = system();
    let backend = system.backend();
    let (kitchen, dosa, _) = kitchen(&system, "owner@example.com").await;
    let mut alice = customer(&system, "alice@example.com").await;
    let a = user(&system, "a@example.com", Role::DeliveryAgent).await;
    let b = user(&system, "b@example.com", Role::DeliveryAgent).await;

    alice.cart_mut().add(&dosa);
    let order = alice.place_order("12 Park Street", PaymentMethod::Card).await.unwrap();
    kitchen.accept(order.id).await.unwrap();
    kitchen.start_preparing(order.id).await.unwrap();
    kitchen.mark_ready(order.id).await.unwrap();

    let (ra, rb) = tokio::join!(
        backend.orders.claim(order.id, a.principal()),
        backend.orders.claim(order.id, b.principal()),
    );
    assert_eq!(ra.is_ok() as u8 + rb.is_ok() as u8, 1);

    let stored = backend.orders.get(order.id).await.unwrap().unwrap();
    let winner = if ra.is_ok() { a.user_id } else { b.user_id };
    assert_eq!(stored.delivery_agent_id, Some(winner));
}

#[tokio::test]
async fn test_agent_with_active_delivery_cannot_claim() {
    let system = system();
    let (kitchen, dosa, vada) = kitchen(&system, "owner@example.com").await;
    let mut alice = customer(&system, "alice@example.com").await;
    let mut dev = rider(&system, "dev@example.com").await;

    let mut orders = Vec::new();
    for dish in [&dosa, &vada] {
        alice.cart_mut().add(dish);
        let order = alice.place_order("12 Park Street", PaymentMethod::Card).await.unwrap();
        kitchen.accept(order.id).await.unwrap();
        kitchen.start_preparing(order.id).await.unwrap();
        kitchen.mark_ready(order.id).await.unwrap();
        orders.push(order);
    }

    dev.claim(orders[0].id).await.unwrap();
    let err = dev.claim(orders[1].id).await.unwrap_err();
    assert_eq!(err.validation(), Some(&ValidationError::ActiveDeliveryInProgress));
}

#[tokio::test]
async fn test_restaurant_transitions_need_the_owner() {
    let system = system();
    let (mut kitchen, dosa, _) = kitchen(&system, "owner@example.com").await;
    let (rival, _, _) = kitchen_named(&system).await;
    let mut alice = customer(&system, "alice@example.com").await;

    alice.cart_mut().add(&dosa);
    let order = alice.place_order("12 Park Street", PaymentMethod::Card).await.unwrap();

    let err = rival.accept(order.id).await.unwrap_err();
    assert!(matches!(err, ViewError::Order(OrderError::Forbidden(_))));

    // skipping a step is an invalid transition
    let err = kitchen.mark_ready(order.id).await.unwrap_err();
    assert!(matches!(
        err,
        ViewError::Order(OrderError::InvalidTransition {
            from: OrderStatus::Pending,
            to: OrderStatus::Ready
        })
    ));

    let cancelled = kitchen.reject(order.id).await.unwrap();
    assert_eq!(cancelled.status, OrderStatus::Cancelled);
    let err = kitchen.accept(order.id).await.unwrap_err();
    assert!(matches!(err, ViewError::Order(OrderError::InvalidTransition { .. })));

    kitchen.sync().await.unwrap();
    assert!(rival.orders().is_empty());
    assert_eq!(kitchen.order(order.id).unwrap().status, OrderStatus::Cancelled);
}

#[tokio::test]
async fn test_order_items_are_scoped_to_the_viewer() {
    let system = system();
    let (kitchen, dosa, _) = kitchen(&system, "owner@example.com").await;
    let (rival, _, _) = kitchen_named(&system).await;
    let mut alice = customer(&system, "alice@example.com").await;
    let bob = customer(&system, "bob@example.com").await;

    alice.cart_mut().add(&dosa);
    let order = alice.place_order("12 Park Street", PaymentMethod::Card).await.unwrap();

    assert_eq!(kitchen.order_items(order.id).await.unwrap().len(), 1);

    assert!(rival.order(order.id).is_none());
    let err = rival.order_items(order.id).await.unwrap_err();
    assert!(matches!(err, ViewError::Order(OrderError::NotFound(_))));

    let err = bob.order_items(order.id).await.unwrap_err();
    assert!(matches!(err, ViewError::Order(OrderError::NotFound(_))));
}

async fn kitchen_named(system: &FoodSystem) -> (RestaurantView, Dish, Dish) {
    kitchen(system, "rival@example.com").await
}

#[tokio::test]
async fn test_menu_management() {
    let system = system();
    let (kitchen, dosa, vada) = kitchen(&system, "owner@example.com").await;
    let (rival, _, _) = kitchen_named(&system).await;
    let alice = customer(&system, "alice@example.com").await;

    let err = kitchen
        .add_dish(DishForm {
            name: "Idli".into(),
            ..DishForm::default()
        })
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Please fill all required fields");

    let err = rival.set_availability(dosa.id, false).await.unwrap_err();
    assert!(matches!(err, ViewError::Dish(DishError::NotOnMenu(_))));

    kitchen.set_availability(vada.id, false).await.unwrap();
    let edited = kitchen
        .edit_dish(dosa.id, dish_form("Ghee Roast Dosa", 140.0, "Dosa"))
        .await
        .unwrap();
    assert_eq!(edited.price, 140.0);

    let restaurant_id = kitchen.restaurant().unwrap().id;
    let menu = alice.menu(restaurant_id).await.unwrap();
    assert_eq!(menu.dishes.len(), 1);
    assert_eq!(menu.categories, vec!["Dosa".to_string()]);
    assert_eq!(kitchen.dishes().await.unwrap().len(), 2);

    kitchen.delete_dish(vada.id).await.unwrap();
    assert_eq!(kitchen.dishes().await.unwrap().len(), 1);

    let cuisines = alice.cuisine_types().await.unwrap();
    assert_eq!(cuisines, vec!["South Indian".to_string()]);
    assert_eq!(alice.browse(Some("KITCHEN"), None).await.unwrap().len(), 2);
    assert!(alice.browse(None, Some("Italian")).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_one_restaurant_per_owner() {
    let system = system();
    let (mut kitchen, _, _) = kitchen(&system, "owner@example.com").await;
    let owner_id = kitchen.session().user_id;

    let err = kitchen
        .register(RestaurantCreate {
            owner_id,
            name: "Second Place".into(),
            description: None,
            address: "5 MG Road".into(),
            phone: "080-5550101".into(),
            image_url: None,
            cuisine_type: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ViewError::Restaurant(RestaurantError::AlreadyRegistered(_))));

    let fresh = user(&system, "new@example.com", Role::Restaurant).await;
    let view = RestaurantView::open(fresh, system.backend()).await.unwrap();
    assert!(view.restaurant().is_none());
    let err = view.dishes().await.unwrap_err();
    assert_eq!(err.validation(), Some(&ValidationError::NoRestaurant));
}

#[tokio::test]
async fn test_views_follow_remote_changes() {
    let system = system();
    let (mut kitchen, dosa, _) = kitchen(&system, "owner@example.com").await;
    let mut alice = customer(&system, "alice@example.com").await;
    let mut bob = customer(&system, "bob@example.com").await;

    alice.cart_mut().add(&dosa);
    let order = alice.place_order("12 Park Street", PaymentMethod::Card).await.unwrap();

    // the kitchen hears about it without reloading
    match kitchen.live().unwrap().next_change().await.unwrap() {
        Some(Feed::Change(change)) => assert_eq!(change.new_row().unwrap().id, order.id),
        other => panic!("expected an insert, got {other:?}"),
    }
    assert_eq!(kitchen.orders().len(), 1);

    kitchen.accept(order.id).await.unwrap();
    alice.sync().await.unwrap();
    assert_eq!(alice.order(order.id).unwrap().status, OrderStatus::Accepted);

    // other customers never see it
    bob.sync().await.unwrap();
    assert!(bob.orders().is_empty());
}

#[tokio::test]
async fn test_lagging_view_reloads() {
    let system = FoodSystem::with_config(SystemConfig {
        feed_capacity: 1,
        ..SystemConfig::default()
    });
    let (kitchen, dosa, vada) = kitchen(&system, "owner@example.com").await;
    let mut alice = customer(&system, "alice@example.com").await;

    let mut placed = Vec::new();
    for dish in [&dosa, &vada, &dosa] {
        alice.cart_mut().add(dish);
        placed.push(alice.place_order("12 Park Street", PaymentMethod::Card).await.unwrap());
    }
    kitchen.accept(placed[0].id).await.unwrap();

    alice.sync().await.unwrap();
    let orders = alice.orders();
    assert_eq!(orders.len(), 3);
    let first = orders.iter().find(|o| o.id == placed[0].id).unwrap();
    assert_eq!(first.status, OrderStatus::Accepted);
}

#[tokio::test]
async fn test_admin_stats() {
    let system = system();
    let (kitchen, dosa, vada) = kitchen(&system, "owner@example.com").await;
    let mut alice = customer(&system, "alice@example.com").await;
    let _bob = customer(&system, "bob@example.com").await;
    let root = user(&system, "root@example.com", Role::Admin).await;

    alice.cart_mut().add(&dosa);
    let first = alice.place_order("12 Park Street", PaymentMethod::Card).await.unwrap();
    alice.cart_mut().add(&vada);
    let second = alice.place_order("12 Park Street", PaymentMethod::Cash).await.unwrap();
    kitchen.reject(second.id).await.unwrap();

    let mut admin = match Dashboard::open(&root, system.backend()).await.unwrap() {
        Dashboard::Admin(view) => view,
        _ => panic!("admin session opened the wrong dashboard"),
    };
    let stats = admin.stats().await.unwrap();
    assert_eq!(stats.total_orders, 2);
    assert_eq!(stats.total_revenue, 150.0);
    assert_eq!(stats.total_customers, 2);
    assert_eq!(stats.total_restaurants, 1);
    assert_eq!(stats.active_orders, 1);
    assert_eq!(stats.completed_orders, 0);

    let recent = admin.recent_orders();
    assert_eq!(recent[0].id, second.id);
    assert_eq!(recent[1].id, first.id);

    kitchen.accept(first.id).await.unwrap();
    admin.sync().await.unwrap();
    assert_eq!(admin.stats().await.unwrap().active_orders, 1);
}

#[tokio::test]
async fn test_recent_orders_respects_limit() {
    let system = FoodSystem::with_config(SystemConfig {
        recent_orders_limit: 2,
        ..SystemConfig::default()
    });
    let (_kitchen, dosa, _) = kitchen(&system, "owner@example.com").await;
    let mut alice = customer(&system, "alice@example.com").await;
    for _ in 0..3 {
        alice.cart_mut().add(&dosa);
        alice.place_order("12 Park Street", PaymentMethod::Card).await.unwrap();
    }
    let root = user(&system, "root@example.com", Role::Admin).await;
    let admin = AdminView::open(root, system.backend()).await.unwrap();
    assert_eq!(admin.recent_orders().len(), 2);
    assert_eq!(admin.stats().await.unwrap().total_orders, 3);
}

#[tokio::test]
async fn test_sign_up_sign_in_and_out() {
    let system = system();
    let session = system.session_provider();
    let mut changes = session.watch();
    assert_eq!(session.state(), SessionState::SignedOut);

    let signed_up = session
        .sign_up(SignUp {
            email: "Alice@Example.com".into(),
            password: "password123".into(),
            full_name: "Alice".into(),
            phone: Some("98450 00000".into()),
            role: Role::Customer,
        })
        .await
        .unwrap();
    assert_eq!(signed_up.email, "alice@example.com");
    assert_eq!(signed_up.profile.id, signed_up.user_id);
    assert!(changes.has_changed().unwrap());
    assert_eq!(
        changes.borrow_and_update().session().map(|s| s.user_id),
        Some(signed_up.user_id)
    );

    session.sign_out();
    assert!(session.current().is_none());

    let err = session.sign_in("alice@example.com", "wrong-password").await.unwrap_err();
    assert!(matches!(err, AuthError::InvalidCredentials));
    assert_eq!(session.state(), SessionState::SignedOut);

    let err = session.sign_in("nobody@example.com", "password123").await.unwrap_err();
    assert!(matches!(err, AuthError::InvalidCredentials));

    let signed_in = session.sign_in("ALICE@example.com ", "password123").await.unwrap();
    assert_eq!(signed_in.profile.role, Role::Customer);
    assert_eq!(session.current(), Some(signed_in));
}

#[tokio::test]
async fn test_sign_up_rejections() {
    let system = system();
    let session = system.session_provider();
    let form = |email: &str, password: &str| SignUp {
        email: email.into(),
        password: password.into(),
        full_name: "Alice".into(),
        phone: None,
        role: Role::Customer,
    };

    session.sign_up(form("alice@example.com", "password123")).await.unwrap();

    let err = session.sign_up(form("ALICE@example.com", "password123")).await.unwrap_err();
    assert!(matches!(err, AuthError::EmailTaken(_)), "got {err:?}");

    let err = session.sign_up(form("carol@example.com", "123")).await.unwrap_err();
    assert!(matches!(err, AuthError::WeakPassword(6)));

    let err = session.sign_up(form("", "password123")).await.unwrap_err();
    assert!(matches!(err, AuthError::Validation(ValidationError::MissingFields)));
}

#[tokio::test]
async fn test_dashboard_dispatch_by_role() {
    let system = system();
    for (email, role) in [
        ("c@example.com", Role::Customer),
        ("r@example.com", Role::Restaurant),
        ("d@example.com", Role::DeliveryAgent),
        ("a@example.com", Role::Admin),
    ] {
        let session = user(&system, email, role).await;
        let dashboard = Dashboard::open(&session, system.backend()).await.unwrap();
        assert_eq!(dashboard.role(), role);
    }

    let session = user(&system, "x@example.com", Role::Customer).await;
    let err = AdminView::open(session, system.backend()).await.err().unwrap();
    assert!(matches!(
        err,
        ViewError::WrongRole {
            expected: Role::Admin,
            actual: Role::Customer
        }
    ));
}

#[tokio::test]
async fn test_graceful_shutdown() {
    let system = system();
    {
        let (_kitchen, dosa, _) = kitchen(&system, "owner@example.com").await;
        let mut alice = customer(&system, "alice@example.com").await;
        alice.cart_mut().add(&dosa);
        alice.place_order("12 Park Street", PaymentMethod::Card).await.unwrap();
    }
    system.shutdown().await.unwrap();
}
