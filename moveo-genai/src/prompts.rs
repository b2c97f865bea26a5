use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

pub const COPYWRITER_INSTRUCTION: &str = "You are a creative marketing copywriter for a premium railway company. Your tone should be persuasive and exciting.";

pub fn marketing_description(
    source: &str,
    destination: &str,
    price_first: Decimal,
    price_economy: Decimal,
) -> String {
    let price_range = format!(
        "Economy class starts at ₹{} and First Class is ₹{}.",
        whole_rupees(price_economy),
        whole_rupees(price_first)
    );
    format!(
        "Write a short, engaging, 2-3 sentence marketing description for a new railway service traveling from {} to {}. Highlight the comfort and the convenient travel time. Use the price range information: {}",
        source, destination, price_range
    )
}

fn whole_rupees(price: Decimal) -> Decimal {
    price.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

pub fn itinerary(destination: &str, date: NaiveDate) -> String {
    format!(
        "Act as a helpful travel guide. Based on the current date, suggest a concise, 3-point itinerary for a traveler arriving in {} on {}. Focus on must-see sights or activities relevant to the local area. Format the output as a numbered list with bold point titles.",
        destination,
        travel_date(date)
    )
}

/// Long form date, e.g. "Wednesday, January 1, 2025"
pub fn travel_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_travel_date() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert_eq!(travel_date(date), "Wednesday, January 1, 2025");
    }

    #[test]
    fn test_marketing_prompt_rounds_prices() {
        let prompt = marketing_description(
            "PUNE",
            "GOA",
            "3499.6".parse().unwrap(),
            Decimal::from(800),
        );
        assert!(prompt.contains("from PUNE to GOA"));
        assert!(prompt.contains("Economy class starts at ₹800 and First Class is ₹3500."));
    }

    #[test]
    fn test_half_rupee_rounds_up() {
        let prompt = marketing_description(
            "PUNE",
            "GOA",
            "1500.5".parse().unwrap(),
            "800.5".parse().unwrap(),
        );
        assert!(prompt.contains("Economy class starts at ₹801 and First Class is ₹1501."));
    }
}
