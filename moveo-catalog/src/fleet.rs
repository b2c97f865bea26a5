use rust_decimal::Decimal;

use moveo_core::{FareClass, FareClasses, Train};

type Fares = [(i64, u32, u32); 3];

fn train(
    id: &str,
    name: &str,
    number: &str,
    route: (&str, &str),
    departure: &str,
    description: Option<&str>,
    fares: Fares,
) -> Train {
    let [first, business, economy] = fares.map(|(price, total, available)| {
        FareClass::new(Decimal::from(price), total, available)
    });
    Train {
        id: id.to_string(),
        train_name: name.to_string(),
        train_number: number.to_string(),
        source: route.0.to_string(),
        destination: route.1.to_string(),
        departure: departure.to_string(),
        description: description.map(str::to_string),
        classes: FareClasses {
            first,
            business,
            economy,
        },
    }
}

/// Sixteen-train demo fleet the service starts with
pub fn demo_fleet() -> Vec<Train> {
    vec![
        train(
            "T001",
            "Capital Express",
            "12051",
            ("DELHI", "MUMBAI"),
            "08:00",
            Some("Journey from the heart of India to the financial capital in style. Our Capital Express offers unparalleled comfort and scenic views."),
            [(3500, 50, 45), (2000, 100, 90), (800, 200, 150)],
        ),
        train(
            "T002",
            "Metro Link",
            "22301",
            ("MUMBAI", "KOLKATA"),
            "14:30",
            Some("Connect between two major metro cities with speed and efficiency. Perfect for business travelers and tourists alike."),
            [(4000, 40, 40), (2500, 80, 75), (1000, 180, 180)],
        ),
        train(
            "T003",
            "Eastern Arrow",
            "15929",
            ("KOLKATA", "DELHI"),
            "21:00",
            None,
            [(3800, 40, 20), (2200, 90, 80), (950, 210, 150)],
        ),
        train(
            "T004",
            "South Connect",
            "11021",
            ("BENGALURU", "CHENNAI"),
            "06:15",
            Some("Experience the swift journey between two of South India's biggest hubs. Ideal for a quick weekend getaway or a business trip."),
            [(1800, 30, 25), (1200, 70, 60), (550, 150, 140)],
        ),
        train(
            "T005",
            "Deccan Queen",
            "12124",
            ("PUNE", "MUMBAI"),
            "17:10",
            Some("The legendary Deccan Queen, connecting Pune and Mumbai with impeccable service and a rich history."),
            [(1000, 20, 10), (700, 50, 45), (300, 120, 100)],
        ),
        train(
            "T006",
            "Tech Express",
            "20608",
            ("HYDERABAD", "BENGALURU"),
            "22:00",
            Some("Overnight service linking the tech capitals of Hyderabad and Bengaluru. Travel while you sleep and arrive fresh for your meetings."),
            [(2500, 40, 35), (1800, 80, 80), (750, 160, 120)],
        ),
        train(
            "T007",
            "Western Star",
            "12957",
            ("AHMEDABAD", "DELHI"),
            "19:30",
            Some("Travel from the vibrant city of Ahmedabad to the nation's capital with our premium overnight service."),
            [(3200, 35, 30), (2100, 90, 85), (900, 200, 190)],
        ),
        train(
            "T008",
            "Coastal Cruiser",
            "12842",
            ("CHENNAI", "KOLKATA"),
            "11:45",
            Some("Enjoy the scenic coastal route from Chennai to Kolkata. A journey as beautiful as the destination."),
            [(4200, 30, 15), (2800, 70, 50), (1100, 180, 175)],
        ),
        train(
            "T009",
            "Mumbai Duronto",
            "12262",
            ("MUMBAI", "DELHI"),
            "23:00",
            Some("The fastest connection back to the capital. Experience a non-stop, high-speed journey overnight."),
            [(3600, 50, 50), (2100, 100, 95), (850, 200, 180)],
        ),
        train(
            "T010",
            "Garden City Express",
            "11022",
            ("CHENNAI", "BENGALURU"),
            "16:00",
            Some("Return to the Garden City with our comfortable and convenient afternoon service."),
            [(1800, 30, 30), (1200, 70, 65), (550, 150, 125)],
        ),
        train(
            "T011",
            "Rajdhani Express",
            "12493",
            ("PUNE", "DELHI"),
            "11:00",
            Some("Connects the cultural capital of Maharashtra to the national capital with premium, high-speed service."),
            [(4500, 40, 38), (3200, 80, 70), (1500, 150, 120)],
        ),
        train(
            "T012",
            "Charminar Express",
            "12759",
            ("HYDERABAD", "CHENNAI"),
            "18:30",
            Some("A popular choice for comfortable overnight travel between Hyderabad and Chennai."),
            [(2200, 30, 25), (1600, 60, 55), (650, 180, 150)],
        ),
        train(
            "T013",
            "Shatabdi Express",
            "12009",
            ("AHMEDABAD", "MUMBAI"),
            "06:40",
            Some("High-speed, premium day service connecting the commercial hubs of Gujarat and Maharashtra."),
            [(1500, 25, 20), (900, 80, 78), (450, 140, 130)],
        ),
        train(
            "T014",
            "Udyan Express",
            "11302",
            ("BENGALURU", "PUNE"),
            "20:30",
            Some("Travel comfortably overnight from the Garden City to the Oxford of the East."),
            [(2800, 35, 30), (1900, 75, 65), (800, 160, 140)],
        ),
        train(
            "T015",
            "Falaknuma Express",
            "12703",
            ("KOLKATA", "HYDERABAD"),
            "07:25",
            Some("A superfast express connecting the City of Joy with the City of Pearls."),
            [(4300, 30, 22), (2900, 90, 80), (1200, 200, 195)],
        ),
        train(
            "T016",
            "Karnataka Express",
            "12628",
            ("DELHI", "BENGALURU"),
            "21:15",
            Some("A long-distance superfast train covering the length of the country, connecting the capital to the Silicon Valley of India."),
            [(5500, 50, 45), (3800, 120, 110), (1800, 250, 220)],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_fleet_is_consistent() {
        let fleet = demo_fleet();
        assert_eq!(fleet.len(), 16);

        let ids: HashSet<_> = fleet.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids.len(), fleet.len());

        for train in &fleet {
            assert_eq!(train.source, train.source.to_uppercase());
            for (_, fare) in train.classes.iter() {
                assert!(fare.available_seats <= fare.total_seats);
                assert!(fare.price > Decimal::ZERO);
            }
        }
    }
}
