use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct City {
    pub name: &'static str,
    pub postal_code: &'static str,
    pub thumbnail: &'static str,
}

impl City {
    const fn new(name: &'static str, postal_code: &'static str, thumbnail: &'static str) -> Self {
        Self {
            name,
            postal_code,
            thumbnail,
        }
    }
}

lazy_static! {
    static ref CITIES: Vec<City> = vec![
        City::new("Mumbai", "400001", "/mumbai.webp"),
        City::new("Pune", "411001", "/pune.webp"),
        City::new("Nashik", "422001", "/nashik.webp"),
        City::new("Delhi", "110001", "/delhi.webp"),
        City::new("Noida", "201301", "/noida.webp"),
        City::new("Faridabad", "121101", "/faridabad.webp"),
        City::new("Gurugram", "122001", "/gurugram.webp"),
        City::new("Chandigarh", "160001", "/chandigarh.webp"),
        City::new("Ghaziabad", "201001", "/ghaziabad.webp"),
        City::new("Hyderabad", "500001", "/hyderabad.webp"),
        City::new("Bangalore", "560001", "/bengalore.webp"),
        City::new("Mysuru", "570001", "/mysuru.webp"),
        City::new("Chennai", "600001", "/chennai.webp"),
        City::new("Jaipur", "302001", "/jaipur.webp"),
    ];
}

/// The supported cities in display order.
pub fn cities() -> &'static [City] {
    CITIES.as_slice()
}
