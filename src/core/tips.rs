use rand::seq::SliceRandom;

pub const HYDRATION_TIPS: [&str; 8] = [
    "Drink a glass of water after you wake up.",
    "Sip water regularly instead of chugging.",
    "Keep a water bottle near your study or work desk.",
    "Drink one glass of water with every meal.",
    "Thirst is a late sign — drink before you feel thirsty.",
    "Water helps with focus, mood, and energy.",
    "Add lemon or cucumber slices for taste.",
    "Eat water-rich foods like watermelon and cucumber.",
];

pub fn random_tip() -> &'static str {
    HYDRATION_TIPS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(HYDRATION_TIPS[0])
}
