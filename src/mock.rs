//! Mock Data
//!
//! Fixed in-memory collections standing in for a backend.

use chrono::NaiveDate;

use crate::models::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn order(
    id: u32,
    placed: NaiveDate,
    gig_title: &str,
    seller_name: &str,
    status: OrderStatus,
    price: f64,
    delivery: NaiveDate,
    package_name: &str,
    description: &str,
) -> Order {
    Order {
        id,
        order_number: format!("ORD-2024-{:03}", id),
        date: placed,
        gig_title: gig_title.to_string(),
        seller_name: seller_name.to_string(),
        status,
        price,
        delivery_date: delivery,
        package_name: package_name.to_string(),
        description: description.to_string(),
        dispute: None,
        rating: None,
    }
}

pub fn orders() -> Vec<Order> {
    vec![
        order(
            1,
            date(2024, 3, 15),
            "I will create stunning social media content for your brand",
            "Sarah Johnson",
            OrderStatus::InProgress,
            95.25,
            date(2024, 3, 17),
            "Standard Package",
            "5 social media posts with custom graphics and hashtag research",
        ),
        order(
            2,
            date(2024, 3, 10),
            "I will design a professional logo for your business",
            "Mike Chen",
            OrderStatus::Completed,
            150.00,
            date(2024, 3, 12),
            "Premium Package",
            "Complete logo design with 3 concepts and unlimited revisions",
        ),
        order(
            3,
            date(2024, 3, 5),
            "I will write compelling website copy for your business",
            "Emma Wilson",
            OrderStatus::Delivered,
            200.00,
            date(2024, 3, 8),
            "Standard Package",
            "Homepage and 3 additional pages with SEO optimization",
        ),
        order(
            4,
            date(2024, 2, 28),
            "I will create animated videos for your marketing",
            "David Garcia",
            OrderStatus::Cancelled,
            300.00,
            date(2024, 3, 5),
            "Basic Package",
            "30-second animated promotional video",
        ),
        order(
            5,
            date(2024, 2, 20),
            "I will develop a mobile app for your business",
            "Alex Rodriguez",
            OrderStatus::Active,
            800.00,
            date(2024, 3, 20),
            "Premium Package",
            "Full mobile app development for iOS and Android",
        ),
    ]
}

pub fn transactions() -> Vec<Transaction> {
    let tx = |id, on, txn: &str, service: &str, category, order: &str, total, kind| Transaction {
        id,
        date: on,
        transaction_id: txn.to_string(),
        service: service.to_string(),
        category,
        order_number: order.to_string(),
        total,
        kind,
    };
    vec![
        tx(1, date(2024, 3, 15), "TXN-456789", "Social Media Content Creation", ServiceCategory::Marketing, "ORD-2024-001", 95.25, TransactionType::Payment),
        tx(2, date(2024, 3, 10), "TXN-456788", "Logo Design Package", ServiceCategory::Design, "ORD-2024-002", 150.00, TransactionType::Payment),
        tx(3, date(2024, 3, 5), "TXN-456787", "Website Copywriting", ServiceCategory::Writing, "ORD-2024-003", 200.00, TransactionType::Payment),
        tx(4, date(2024, 2, 28), "TXN-456786", "Refund - Logo Design", ServiceCategory::Design, "ORD-2024-004", 75.00, TransactionType::Refund),
        tx(5, date(2024, 2, 20), "TXN-456785", "Mobile App Development", ServiceCategory::Development, "ORD-2024-005", 800.00, TransactionType::Payment),
        tx(6, date(2023, 11, 2), "TXN-451230", "Animated Explainer Video", ServiceCategory::Video, "ORD-2023-118", 120.00, TransactionType::Payment),
    ]
}

pub fn payment_methods() -> Vec<PaymentMethod> {
    vec![
        PaymentMethod {
            id: 1,
            brand: CardBrand::Visa,
            last4: "4242".to_string(),
            expiry_month: "12".to_string(),
            expiry_year: "25".to_string(),
            is_default: true,
        },
        PaymentMethod {
            id: 2,
            brand: CardBrand::Mastercard,
            last4: "5555".to_string(),
            expiry_month: "08".to_string(),
            expiry_year: "26".to_string(),
            is_default: false,
        },
    ]
}

pub fn gigs() -> Vec<Gig> {
    let gig = |id, title: &str, seller: &str, category, image: &str, rating, review_count, price, is_favorited| Gig {
        id,
        title: title.to_string(),
        seller_name: seller.to_string(),
        category,
        cover_image: format!("https://images.unsplash.com/{}?w=400&h=300&fit=crop", image),
        rating,
        review_count,
        price,
        is_favorited,
    };
    vec![
        gig(1, "I will create stunning logo designs for your business", "Sarah Design", GigCategory::GraphicsDesign, "photo-1626785774573-4b799315345d", 4.9, 152, 25, false),
        gig(2, "I will write compelling content for your website and blog", "Alex Writer", GigCategory::Writing, "photo-1455390582262-044cdead277a", 4.8, 89, 15, true),
        gig(3, "I will develop a responsive WordPress website", "Dev Master", GigCategory::Technology, "photo-1467232004584-a241de8bcf5d", 5.0, 203, 150, false),
        gig(4, "I will create engaging social media graphics and posts", "Creative Studio", GigCategory::GraphicsDesign, "photo-1611224923853-80b023f02d71", 4.7, 67, 35, false),
        gig(5, "I will provide professional video editing services", "Video Pro", GigCategory::VideoAnimation, "photo-1574375927938-d5a98e8ffe85", 4.9, 124, 75, true),
    ]
}

pub fn gig_detail(gig_id: u32) -> GigDetail {
    let gig = gigs()
        .into_iter()
        .find(|g| g.id == gig_id)
        .unwrap_or_else(|| Gig {
            id: gig_id,
            title: "I will draw a children's book cover".to_string(),
            seller_name: "Children's Books".to_string(),
            category: GigCategory::GraphicsDesign,
            cover_image: "https://images.unsplash.com/photo-1578662996442-48f60103fc96?w=600&h=400&fit=crop".to_string(),
            rating: 4.9,
            review_count: 1294,
            price: 10,
            is_favorited: false,
        });
    let base = gig.price;
    GigDetail {
        description: format!(
            "{}. I work closely with you from brief to final delivery so the result fits your brand and audience.",
            gig.title.trim_start_matches("I will ")
        ),
        work_process: "First, I'll discuss your vision and requirements. Then I'll create initial sketches, refine them with your feedback and deliver the final files.".to_string(),
        seller: SellerProfile {
            name: gig.seller_name.clone(),
            rating: 4.8,
            review_count: 2156,
            country: "India".to_string(),
            last_delivery: "18 hours ago".to_string(),
            bio: format!("Hi, I'm {} and I've been freelancing on the marketplace for five years.", gig.seller_name),
        },
        packages: vec![
            GigPackage {
                name: "Basic".to_string(),
                price: base,
                features: strings(&["Source File", "1 Revision", "7 Day Delivery"]),
            },
            GigPackage {
                name: "Standard".to_string(),
                price: base * 2,
                features: strings(&["Source File", "High Resolution", "2 Revisions", "5 Day Delivery"]),
            },
            GigPackage {
                name: "Premium".to_string(),
                price: base * 5,
                features: strings(&["Source File", "High Resolution", "Commercial Use", "Unlimited Revisions", "3 Day Delivery"]),
            },
        ],
        tags: strings(&["Cute", "Draw", "Books"]),
        gig,
    }
}

pub fn reviews() -> Vec<Review> {
    let review = |id, name: &str, rating, days_ago, comment: &str| Review {
        id,
        buyer_name: name.to_string(),
        rating,
        days_ago,
        comment: comment.to_string(),
    };
    vec![
        review(1, "John D", 5, 1, "Absolutely fantastic work! The illustration exceeded my expectations and was delivered on time."),
        review(2, "Emily R", 5, 3, "Amazing quality and fast delivery. The cover design perfectly captured the essence of my book. Highly recommend!"),
        review(3, "Michael K", 4, 7, "Great work overall. The seller was responsive and made the requested revisions promptly."),
        review(4, "Sarah M", 5, 14, "Exceptional creativity and attention to detail. The illustration brought my story to life."),
        review(5, "David L", 4, 21, "Professional service and good communication throughout the project."),
    ]
}

pub fn checkout_package() -> CheckoutPackage {
    CheckoutPackage {
        gig_title: "I will create stunning social media content for your brand".to_string(),
        seller_name: "Sarah Johnson".to_string(),
        package_name: "Standard Package".to_string(),
        price: 75.0,
        delivery_time: "3 days".to_string(),
        revisions: 2,
        includes: strings(&[
            "5 social media posts",
            "Custom graphics design",
            "Hashtag research",
            "Brand guidelines compliance",
        ]),
    }
}

pub fn extras() -> Vec<Extra> {
    let extra = |id, name: &str, price| Extra {
        id,
        name: name.to_string(),
        price,
        delivery_override: None,
        extra_revisions: 0,
    };
    vec![
        Extra {
            delivery_override: Some("24 hours".to_string()),
            ..extra(1, "Extra Fast Delivery (24 hours)", 25.0)
        },
        Extra { extra_revisions: 1, ..extra(2, "Additional Revision", 15.0) },
        extra(3, "Source Files", 20.0),
        extra(4, "Commercial License", 30.0),
    ]
}

pub fn conversations() -> Vec<Conversation> {
    let msg = |id, sender, content: &str, timestamp: &str, is_read| Message {
        id,
        sender,
        content: content.to_string(),
        timestamp: timestamp.to_string(),
        is_read,
    };
    let contact = |name: &str, initials: &str, is_online| Contact {
        name: name.to_string(),
        initials: initials.to_string(),
        is_online,
    };
    vec![
        Conversation {
            id: 1,
            seller: contact("Sarah Johnson", "SJ", true),
            gig_title: "Social Media Content Creation".to_string(),
            order_number: "ORD-2024-001".to_string(),
            last_message_time: "2 min ago".to_string(),
            messages: vec![
                msg(1, Sender::Seller, "Hi! Thanks for placing the order. Do you have any specific brand guidelines I should follow?", "10:30 AM", true),
                msg(2, Sender::Buyer, "Hello! Yes, I'll send you our brand guidelines. We prefer a modern, minimalist style.", "10:35 AM", true),
                msg(3, Sender::Seller, "Perfect! Could you also share some examples of content you like?", "10:40 AM", false),
                msg(4, Sender::Seller, "I'll have the first draft ready by tomorrow morning!", "11:15 AM", false),
            ],
        },
        Conversation {
            id: 2,
            seller: contact("Mike Chen", "MC", false),
            gig_title: "Logo Design Package".to_string(),
            order_number: "ORD-2024-002".to_string(),
            last_message_time: "1 hour ago".to_string(),
            messages: vec![msg(1, Sender::Seller, "Hi! I've started working on your logo design. The logo concepts are ready for review", "Yesterday 3:20 PM", true)],
        },
        Conversation {
            id: 3,
            seller: contact("Emma Wilson", "EW", true),
            gig_title: "Website Copywriting".to_string(),
            order_number: "ORD-2024-003".to_string(),
            last_message_time: "3 hours ago".to_string(),
            messages: vec![msg(1, Sender::Seller, "When would be a good time for a quick call?", "Today 8:30 AM", false)],
        },
    ]
}

pub fn profile() -> ProfileData {
    ProfileData {
        full_name: "John Doe".to_string(),
        email: "john.doe@example.com".to_string(),
        phone: "+1 (555) 123-4567".to_string(),
        interested_topics: strings(&["web-development", "graphic-design"]),
    }
}

pub fn billing_info() -> BillingInfo {
    BillingInfo {
        full_name: "John Doe".to_string(),
        company_name: "Acme Corp".to_string(),
        country: "United States".to_string(),
        state: "California".to_string(),
        address: "123 Main Street".to_string(),
        city: "San Francisco".to_string(),
        zip_code: "94105".to_string(),
        vat_number: String::new(),
        email_invoices: true,
    }
}

pub const COUNTRIES: &[&str] = &["United States", "Canada", "United Kingdom", "Germany", "India", "Australia"];

pub fn topic_options() -> Vec<TopicOption> {
    [
        ("web-development", "Web Development"),
        ("mobile-development", "Mobile Development"),
        ("graphic-design", "Graphic Design"),
        ("digital-marketing", "Digital Marketing"),
        ("content-writing", "Content Writing"),
        ("video-editing", "Video Editing"),
        ("animation", "Animation"),
        ("photography", "Photography"),
        ("ui-ux-design", "UI/UX Design"),
        ("data-analysis", "Data Analysis"),
        ("social-media", "Social Media Management"),
        ("seo", "SEO Optimization"),
    ]
    .into_iter()
    .map(|(value, label)| TopicOption { value: value.to_string(), label: label.to_string() })
    .collect()
}
