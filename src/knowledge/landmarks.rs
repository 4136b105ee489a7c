use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A notable site with the foods it is known for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Landmark {
    pub name: String,
    /// Kind of site (e.g., "Monument", "Museum")
    pub kind: String,
    pub description: String,
    pub famous_foods: Vec<String>,
    pub nearby_food_spots: Vec<String>,
}

struct Seed {
    name: &'static str,
    kind: &'static str,
    description: &'static str,
    famous_foods: &'static [&'static str],
    nearby_food_spots: &'static [&'static str],
}

impl Seed {
    fn to_landmark(&self) -> Landmark {
        Landmark {
            name: self.name.to_string(),
            kind: self.kind.to_string(),
            description: self.description.to_string(),
            famous_foods: self.famous_foods.iter().map(|s| s.to_string()).collect(),
            nearby_food_spots: self
                .nearby_food_spots
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

macro_rules! seed {
    ($name:expr, $kind:expr, $description:expr, [$($food:expr),+], [$($spot:expr),+]) => {
        Seed {
            name: $name,
            kind: $kind,
            description: $description,
            famous_foods: &[$($food),+],
            nearby_food_spots: &[$($spot),+],
        }
    };
}

/// Cities matched by exact alias.
const CITIES: &[(&[&str], [Seed; 3])] = &[
    (
        &["paris", "paris, france"],
        [
            seed!("Eiffel Tower", "Monument", "Iconic symbol of Paris with panoramic city views.",
                ["Crêpes", "Baguette Sandwiches"], ["Le Champ de Mars Café", "Bistro Parisien"]),
            seed!("Louvre Museum", "Museum", "World's largest art museum and a historic monument.",
                ["French Pastries", "Croissants"], ["Café Marly", "Le Fumoir"]),
            seed!("Montmartre", "Neighborhood", "Historic district known for its bohemian atmosphere and artists.",
                ["Escargots", "Ratatouille"], ["Le Consulat", "La Maison Rose"]),
        ],
    ),
    (
        &["new york", "new york city", "nyc"],
        [
            seed!("Statue of Liberty", "Monument", "Famous symbol of freedom and democracy.",
                ["New York Hot Dog", "Soft Pretzel"], ["Liberty Island Café", "Battery Gardens"]),
            seed!("Central Park", "Park", "Urban park in Manhattan with scenic walking paths and lakes.",
                ["Bagels", "NY Cheesecake"], ["The Loeb Boathouse", "Tavern on the Green"]),
            seed!("Times Square", "Entertainment District", "Bustling commercial and entertainment hub with bright lights.",
                ["Pizza Slice", "Deli Sandwich"], ["Junior's Restaurant", "Carmine's"]),
        ],
    ),
    (
        &["hyderabad", "hyderabad, india", "hyd"],
        [
            seed!("Charminar", "Monument", "Iconic 16th-century mosque with four grand arches, symbol of Hyderabad.",
                ["Hyderabadi Biryani", "Irani Chai"], ["Shadab Hotel", "Nimrah Cafe"]),
            seed!("Golconda Fort", "Fort", "Historic fortress known for its acoustics, palaces, and scenic views.",
                ["Haleem", "Double Ka Meetha"], ["Pista House", "Cafe Bahar"]),
            seed!("Hussain Sagar Lake", "Lake", "Heart-shaped lake with a large Buddha statue and boating activities.",
                ["Mirchi Bajji", "Corn on the Cob"], ["Eat Street", "Waterfront Restaurant"]),
        ],
    ),
    (
        &["delhi", "new delhi", "delhi, india", "del"],
        [
            seed!("Red Fort", "Fort", "Historic 17th-century fort and UNESCO World Heritage Site.",
                ["Chole Bhature", "Paratha"], ["Paranthe Wali Gali", "Karim's"]),
            seed!("Qutub Minar", "Minaret", "Tallest brick minaret in the world, built in 1193.",
                ["Dahi Bhalla", "Aloo Tikki"], ["Haldiram's", "Bengali Sweet House"]),
            seed!("India Gate", "Monument", "War memorial and iconic landmark in central Delhi.",
                ["Kulfi Falooda", "Bhel Puri"], ["India Gate Street Vendors", "Kwality Restaurant"]),
        ],
    ),
    (
        &["mumbai", "bombay", "mumbai, india", "bom"],
        [
            seed!("Gateway of India", "Monument", "Grand arch monument overlooking the Arabian Sea.",
                ["Vada Pav", "Bhel Puri"], ["Bademiya", "Leopold Cafe"]),
            seed!("Chhatrapati Shivaji Maharaj Terminus", "Railway Station", "UNESCO World Heritage Site and historic railway station.",
                ["Bombay Sandwich", "Frankie"], ["Cannon Pav Bhaji", "Ayub's"]),
            seed!("Marine Drive", "Promenade", "Scenic boulevard along the coast, known as the Queen's Necklace.",
                ["Pav Bhaji", "Kulfi"], ["Sukh Sagar", "Tiwari Bros Mithaiwala"]),
        ],
    ),
    (
        &["chennai", "madras", "chennai, india", "maa"],
        [
            seed!("Marina Beach", "Beach", "Longest urban beach in India, popular for walks and street food.",
                ["Sundal", "Murukku"], ["Marina Beach Stalls", "Ratna Cafe"]),
            seed!("Kapaleeshwarar Temple", "Temple", "Ancient Dravidian-style temple dedicated to Lord Shiva.",
                ["Filter Coffee", "Idli Sambar"], ["Mylai Karpagambal Mess", "Rayar's Cafe"]),
            seed!("Fort St. George", "Fort", "Historic British fort and museum complex.",
                ["Dosa", "Vada"], ["Murugan Idli Shop", "Saravana Bhavan"]),
        ],
    ),
    (
        &["goa", "goa, india", "goi"],
        [
            seed!("Baga Beach", "Beach", "Popular beach known for nightlife, water sports, and shacks.",
                ["Goan Fish Curry", "Prawn Balchao"], ["Britto's", "St. Anthony's Shack"]),
            seed!("Basilica of Bom Jesus", "Church", "UNESCO World Heritage Site famous for baroque architecture.",
                ["Bebinca", "Sannas"], ["Fisherman's Wharf", "Mum's Kitchen"]),
            seed!("Fort Aguada", "Fort", "17th-century Portuguese fort with panoramic sea views.",
                ["Chicken Cafreal", "Feni"], ["Souza Lobo", "Fat Fish"]),
        ],
    ),
];

/// Countries matched by substring once no city alias applies.
const COUNTRIES: &[(&str, [Seed; 3])] = &[
    (
        "france",
        [
            seed!("Eiffel Tower", "Monument", "Iconic Parisian landmark with panoramic city views.",
                ["Crêpes", "Baguette", "Croissant"], ["Le Champ de Mars Café", "Bistro Parisien"]),
            seed!("Louvre Museum", "Museum", "World's largest art museum and a historic monument in Paris.",
                ["French Pastries", "Macarons"], ["Café Marly", "Le Fumoir"]),
            seed!("Mont Saint-Michel", "Island Abbey", "Medieval abbey on a tidal island, a UNESCO World Heritage Site.",
                ["Omelette de la Mère Poulard", "Seafood Platter"], ["La Mère Poulard", "Le Relais du Roy"]),
        ],
    ),
    (
        "italy",
        [
            seed!("Colosseum", "Amphitheatre", "Ancient Roman amphitheatre in the heart of Rome.",
                ["Pizza Margherita", "Gelato"], ["Trattoria Luzzi", "Gelateria La Dolce Vita"]),
            seed!("Leaning Tower of Pisa", "Tower", "Famous leaning bell tower in Pisa.",
                ["Pasta Carbonara", "Tiramisu"], ["Ristorante Piazza dei Miracoli", "Osteria in Domo"]),
            seed!("Venice Grand Canal", "Canal", "Picturesque waterway lined with Renaissance and Gothic palaces.",
                ["Risotto", "Cicchetti"], ["Osteria alle Testiere", "Cantina Do Spade"]),
        ],
    ),
    (
        "japan",
        [
            seed!("Mount Fuji", "Mountain", "Japan's tallest peak and iconic symbol.",
                ["Sushi", "Ramen"], ["Fujiyama Restaurant", "Sushi Zanmai"]),
            seed!("Fushimi Inari Shrine", "Shrine", "Famous for its thousands of vermilion torii gates in Kyoto.",
                ["Yakitori", "Matcha Sweets"], ["Inari Sushi Koji", "Kyoto Saryo"]),
            seed!("Tokyo Skytree", "Tower", "Tallest structure in Japan with observation decks and city views.",
                ["Tempura", "Takoyaki"], ["Skytree Cafe", "Asakusa Menchi"]),
        ],
    ),
];

/// Landmarks for a destination; unknown destinations get three generic entries.
pub fn landmarks_for(destination: &str) -> Vec<Landmark> {
    let normalized = destination.trim().to_lowercase();

    if let Some((_, seeds)) = CITIES
        .iter()
        .find(|(aliases, _)| aliases.contains(&normalized.as_str()))
    {
        return seeds.iter().map(Seed::to_landmark).collect();
    }

    if let Some((_, seeds)) = COUNTRIES
        .iter()
        .find(|(country, _)| normalized.contains(country))
    {
        return seeds.iter().map(Seed::to_landmark).collect();
    }

    generic_landmarks(&title_case(destination.trim()))
}

fn generic_landmarks(place: &str) -> Vec<Landmark> {
    let landmark = |name: String, kind: &str, description: String, foods: [String; 2], spots: [String; 2]| {
        Landmark {
            name,
            kind: kind.to_string(),
            description,
            famous_foods: foods.to_vec(),
            nearby_food_spots: spots.to_vec(),
        }
    };

    vec![
        landmark(
            format!("Central {} Landmark", place),
            "Landmark",
            format!("A must-see attraction in {} with local history and culture.", place),
            [format!("Signature {} Dish", place), format!("Popular {} Snack", place)],
            [format!("Famous {} Eatery", place), format!("Popular {} Cafe", place)],
        ),
        landmark(
            format!("Historic {} Site", place),
            "Historic Site",
            format!("A place of historical importance in {} with unique architecture.", place),
            [format!("Traditional {} Food", place), format!("Local {} Dessert", place)],
            [
                format!("Best {} Restaurant", place),
                format!("Traditional {} Sweet Shop", place),
            ],
        ),
        landmark(
            format!("{} Park or Beach", place),
            "Park/Beach",
            format!("A scenic spot for relaxation and recreation in {}.", place),
            [format!("Local {} Treat", place), format!("Refreshing {} Drink", place)],
            [format!("Best {} Food Stall", place), format!("Popular {} Bar", place)],
        ),
    ]
}

/// Uppercase the first letter of every alphabetic run and lowercase the rest.
pub fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut previous_is_letter = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if previous_is_letter {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            result.push(c);
            previous_is_letter = false;
        }
    }
    result
}
