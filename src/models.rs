//! Frontend Models
//!
//! Data structures behind the marketplace screens.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ========================
// Orders
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    Active,
    InProgress,
    Delivered,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Active,
        OrderStatus::InProgress,
        OrderStatus::Delivered,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ];

    /// Value used by the status filter
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Active => "active",
            OrderStatus::InProgress => "in-progress",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Active => "Active",
            OrderStatus::InProgress => "In Progress",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Completed => "Completed",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// Work has been handed over, files can be downloaded and rated
    pub fn is_finished(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Completed)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dispute {
    pub reason: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub stars: u8,
    pub comment: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: u32,
    pub order_number: String,
    pub date: NaiveDate,
    pub gig_title: String,
    pub seller_name: String,
    pub status: OrderStatus,
    pub price: f64,
    pub delivery_date: NaiveDate,
    pub package_name: String,
    pub description: String,
    #[serde(default)]
    pub dispute: Option<Dispute>,
    #[serde(default)]
    pub rating: Option<Rating>,
}

// ========================
// Billing
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransactionType {
    Payment,
    Refund,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Payment => "payment",
            TransactionType::Refund => "refund",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TransactionType::Payment => "Payment",
            TransactionType::Refund => "Refund",
        }
    }
}

/// Service line a transaction belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceCategory {
    Design,
    Marketing,
    Writing,
    Development,
    Video,
}

impl ServiceCategory {
    pub const ALL: [ServiceCategory; 5] = [
        ServiceCategory::Design,
        ServiceCategory::Marketing,
        ServiceCategory::Writing,
        ServiceCategory::Development,
        ServiceCategory::Video,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceCategory::Design => "design",
            ServiceCategory::Marketing => "marketing",
            ServiceCategory::Writing => "writing",
            ServiceCategory::Development => "development",
            ServiceCategory::Video => "video",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ServiceCategory::Design => "Design",
            ServiceCategory::Marketing => "Marketing",
            ServiceCategory::Writing => "Writing",
            ServiceCategory::Development => "Development",
            ServiceCategory::Video => "Video",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: u32,
    pub date: NaiveDate,
    pub transaction_id: String,
    pub service: String,
    pub category: ServiceCategory,
    pub order_number: String,
    pub total: f64,
    pub kind: TransactionType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CardBrand {
    Visa,
    Mastercard,
    Amex,
}

impl CardBrand {
    /// Guess the brand from the leading digits
    pub fn detect(digits: &str) -> Self {
        if digits.starts_with("34") || digits.starts_with("37") {
            CardBrand::Amex
        } else if digits.starts_with('5') || digits.starts_with('2') {
            CardBrand::Mastercard
        } else {
            CardBrand::Visa
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CardBrand::Visa => "Visa",
            CardBrand::Mastercard => "Mastercard",
            CardBrand::Amex => "American Express",
        }
    }

    pub fn badge(&self) -> &'static str {
        match self {
            CardBrand::Visa => "VISA",
            CardBrand::Mastercard => "MC",
            CardBrand::Amex => "AMEX",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub id: u32,
    pub brand: CardBrand,
    pub last4: String,
    pub expiry_month: String,
    pub expiry_year: String,
    pub is_default: bool,
}

impl PaymentMethod {
    pub fn display_name(&self) -> String {
        format!("{} ending in {}", self.brand.label(), self.last4)
    }
}

// ========================
// Gigs & Reviews
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GigCategory {
    GraphicsDesign,
    Writing,
    Technology,
    VideoAnimation,
    DigitalMarketing,
}

impl GigCategory {
    pub const ALL: [GigCategory; 5] = [
        GigCategory::GraphicsDesign,
        GigCategory::Writing,
        GigCategory::Technology,
        GigCategory::VideoAnimation,
        GigCategory::DigitalMarketing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GigCategory::GraphicsDesign => "graphics-design",
            GigCategory::Writing => "writing",
            GigCategory::Technology => "technology",
            GigCategory::VideoAnimation => "video-animation",
            GigCategory::DigitalMarketing => "digital-marketing",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GigCategory::GraphicsDesign => "Graphics & Design",
            GigCategory::Writing => "Writing & Translation",
            GigCategory::Technology => "Technology",
            GigCategory::VideoAnimation => "Video & Animation",
            GigCategory::DigitalMarketing => "Digital Marketing",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gig {
    pub id: u32,
    pub title: String,
    pub seller_name: String,
    pub category: GigCategory,
    pub cover_image: String,
    pub rating: f32,
    pub review_count: u32,
    pub price: u32,
    pub is_favorited: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GigPackage {
    pub name: String,
    pub price: u32,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellerProfile {
    pub name: String,
    pub rating: f32,
    pub review_count: u32,
    pub country: String,
    pub last_delivery: String,
    pub bio: String,
}

/// Everything shown on the gig detail screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GigDetail {
    pub gig: Gig,
    pub description: String,
    pub work_process: String,
    pub seller: SellerProfile,
    pub packages: Vec<GigPackage>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: u32,
    pub buyer_name: String,
    pub rating: u8,
    pub days_ago: u32,
    pub comment: String,
}

impl Review {
    pub fn time_ago(&self) -> String {
        match self.days_ago {
            0 => "today".to_string(),
            1 => "1 day ago".to_string(),
            d if d < 7 => format!("{} days ago", d),
            d if d < 14 => "1 week ago".to_string(),
            d => format!("{} weeks ago", d / 7),
        }
    }
}

// ========================
// Checkout & Payment
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extra {
    pub id: u32,
    pub name: String,
    pub price: f64,
    /// Replaces the package delivery time when picked
    #[serde(default)]
    pub delivery_override: Option<String>,
    #[serde(default)]
    pub extra_revisions: u32,
}

/// The package being bought
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutPackage {
    pub gig_title: String,
    pub seller_name: String,
    pub package_name: String,
    pub price: f64,
    pub delivery_time: String,
    pub revisions: u32,
    pub includes: Vec<String>,
}

/// Priced order handed from checkout to payment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub gig_title: String,
    pub seller_name: String,
    pub package_name: String,
    pub quantity: u32,
    pub package_price: f64,
    pub extras: Vec<Extra>,
    pub service_fee: f64,
    pub discount: f64,
    pub total: f64,
    pub delivery_time: String,
    pub revisions: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentReceipt {
    pub order_number: String,
    pub transaction_id: String,
    pub date: NaiveDate,
    pub amount: f64,
    pub method: String,
    pub summary: OrderSummary,
}

// ========================
// Messages
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Sender {
    Buyer,
    Seller,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: u32,
    pub sender: Sender,
    pub content: String,
    pub timestamp: String,
    pub is_read: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub initials: String,
    pub is_online: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: u32,
    pub seller: Contact,
    pub gig_title: String,
    pub order_number: String,
    pub last_message_time: String,
    pub messages: Vec<Message>,
}

impl Conversation {
    pub fn last_message(&self) -> &str {
        self.messages.last().map(|m| m.content.as_str()).unwrap_or("")
    }

    /// Unread messages from the seller
    pub fn unread_count(&self) -> usize {
        self.messages
            .iter()
            .filter(|m| m.sender == Sender::Seller && !m.is_read)
            .count()
    }
}

// ========================
// Profile
// ========================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProfileData {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub interested_topics: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BillingInfo {
    pub full_name: String,
    pub company_name: String,
    pub country: String,
    pub state: String,
    pub address: String,
    pub city: String,
    pub zip_code: String,
    pub vat_number: String,
    pub email_invoices: bool,
}

/// Option of the interested-topics multi-select
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicOption {
    pub value: String,
    pub label: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_status_serializes_kebab_case() {
        let json = serde_json::to_string(&OrderStatus::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");
        for status in OrderStatus::ALL {
            assert_eq!(serde_json::to_string(&status).unwrap(), format!("\"{}\"", status.as_str()));
        }
    }

    #[test]
    fn test_card_brand_detect() {
        assert_eq!(CardBrand::detect("4242424242424242"), CardBrand::Visa);
        assert_eq!(CardBrand::detect("5555555555554444"), CardBrand::Mastercard);
        assert_eq!(CardBrand::detect("378282246310005"), CardBrand::Amex);
    }

    #[test]
    fn test_review_time_ago() {
        let mut review = Review { id: 1, buyer_name: "A".into(), rating: 5, days_ago: 1, comment: String::new() };
        assert_eq!(review.time_ago(), "1 day ago");
        review.days_ago = 3;
        assert_eq!(review.time_ago(), "3 days ago");
        review.days_ago = 7;
        assert_eq!(review.time_ago(), "1 week ago");
        review.days_ago = 21;
        assert_eq!(review.time_ago(), "3 weeks ago");
    }

    #[test]
    fn test_unread_count_only_counts_seller_messages() {
        let message = |id, sender, is_read| Message {
            id,
            sender,
            content: format!("m{}", id),
            timestamp: String::new(),
            is_read,
        };
        let conversation = Conversation {
            id: 1,
            seller: Contact { name: "S".into(), initials: "S".into(), is_online: false },
            gig_title: String::new(),
            order_number: String::new(),
            last_message_time: String::new(),
            messages: vec![
                message(1, Sender::Seller, false),
                message(2, Sender::Buyer, false),
                message(3, Sender::Seller, true),
            ],
        };
        assert_eq!(conversation.unread_count(), 1);
        assert_eq!(conversation.last_message(), "m3");
    }
}
