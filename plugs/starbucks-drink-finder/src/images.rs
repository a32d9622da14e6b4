pub const NO_IMAGE: &str = "/images/drinks/no_image_available.png";

// Beverage names exactly as the recommender spells them.
const DRINK_IMAGES: &[(&str, &str)] = &[
    ("Brewed Coffee", "/images/drinks/brewed_coffee.png"),
    ("Cappuccino", "/images/drinks/cappuccino.png"),
    ("Ice Brewed Coffee", "/images/drinks/cold_brew.png"),
    ("Espresso", "/images/drinks/espresso.png"),
    ("Frappuccino", "/images/drinks/moca_frappuccino.png"),
    ("Caffè Latte", "/images/drinks/caffe_latte.png"),
    ("White Chocolate Mocha", "/images/drinks/white_chocolate_mocha.png"),
    ("Caramel Macchiato", "/images/drinks/caramel_macchiato.png"),
    ("Java Chip", "/images/drinks/java_chip.png"),
    ("No drinks found at all for these tags", NO_IMAGE),
];

pub fn image_for(beverage: &str) -> &'static str {
    DRINK_IMAGES
        .iter()
        .find(|(name, _)| *name == beverage)
        .map(|(_, path)| *path)
        .unwrap_or(NO_IMAGE)
}
