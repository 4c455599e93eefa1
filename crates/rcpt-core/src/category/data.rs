//! Built-in keyword catalog.
//!
//! A few keywords sit under two categories (`ice cream`, `frozen yogurt`,
//! `crackers`, `bagels`, `muffin`, `croissant`). Substring and fuzzy matching
//! see both entries; exact lookup goes to the category listed last here.

use crate::models::category::CategoryLabel;

pub(crate) const BUILTIN_KEYWORDS: &[(CategoryLabel, &[&str])] = &[
    (
        CategoryLabel::Fruits,
        &[
            "apple", "apples", "banana", "bananas", "orange", "oranges", "grape", "grapes",
            "strawberry", "strawberries", "blueberry", "blueberries", "raspberry", "raspberries",
            "mango", "mangoes", "pineapple", "watermelon", "cantaloupe", "honeydew", "peach",
            "peaches", "pear", "pears", "plum", "plums", "cherry", "cherries", "lemon", "lemons",
            "lime", "limes", "avocado", "avocados", "kiwi", "papaya", "coconut", "pomegranate",
            "cranberry", "cranberries", "blackberry", "blackberries",
        ],
    ),
    (
        CategoryLabel::Vegetables,
        &[
            "carrot", "carrots", "broccoli", "cauliflower", "spinach", "lettuce", "tomato",
            "tomatoes", "cucumber", "bell pepper", "peppers", "onion", "onions", "garlic",
            "potato", "potatoes", "sweet potato", "celery", "zucchini", "squash", "corn", "peas",
            "green beans", "beans", "asparagus", "mushroom", "mushrooms", "cabbage", "kale",
            "brussels sprouts", "radish", "beet", "beets", "turnip", "parsnip", "leek",
            "artichoke", "eggplant", "okra", "jalapeno", "serrano",
        ],
    ),
    (
        CategoryLabel::Meat,
        &[
            "chicken", "beef", "pork", "turkey", "lamb", "fish", "salmon", "tuna", "cod",
            "tilapia", "shrimp", "crab", "lobster", "bacon", "ham", "sausage", "ground beef",
            "ground turkey", "ground chicken", "steak", "roast", "ribs", "wings", "thighs",
            "breast", "drumstick", "meatball", "hot dog", "deli meat", "pepperoni", "salami",
        ],
    ),
    (
        CategoryLabel::Dairy,
        &[
            "milk", "cheese", "butter", "yogurt", "cream", "sour cream", "cottage cheese",
            "mozzarella", "cheddar", "swiss", "parmesan", "feta", "ricotta", "cream cheese",
            "half and half", "heavy cream", "whipped cream", "ice cream", "frozen yogurt",
            "eggs", "egg whites", "egg substitute",
        ],
    ),
    (
        CategoryLabel::Grains,
        &[
            "bread", "rice", "pasta", "cereal", "oats", "quinoa", "barley", "wheat", "flour",
            "bagel", "bagels", "muffin", "muffins", "crackers", "tortilla", "tortillas",
            "noodles", "spaghetti", "macaroni", "penne", "linguine", "rolls", "baguette",
            "croissant", "pancake mix", "waffle", "granola", "oatmeal",
        ],
    ),
    (
        CategoryLabel::Beverages,
        &[
            "water", "juice", "soda", "coffee", "tea", "beer", "wine", "energy drink",
            "sports drink", "coconut water", "almond milk", "soy milk", "oat milk",
            "sparkling water", "lemonade", "iced tea", "kombucha", "smoothie",
        ],
    ),
    (
        CategoryLabel::Snacks,
        &[
            "chips", "popcorn", "pretzels", "nuts", "peanuts", "almonds", "cashews", "walnuts",
            "trail mix", "granola bar", "protein bar", "candy", "chocolate", "cookies",
            "crackers", "jerky", "dried fruit", "raisins", "dates", "gum", "mints",
        ],
    ),
    (
        CategoryLabel::Frozen,
        &[
            "frozen pizza", "frozen vegetables", "frozen fruit", "ice cream", "frozen yogurt",
            "frozen meal", "frozen dinner", "frozen burrito", "frozen chicken", "frozen fish",
            "frozen shrimp", "frozen berries", "frozen peas", "frozen corn", "popsicle",
            "frozen waffle", "frozen pancake", "frozen bread",
        ],
    ),
    (
        CategoryLabel::Pantry,
        &[
            "oil", "olive oil", "vinegar", "salt", "pepper", "sugar", "honey", "syrup", "vanilla",
            "baking powder", "baking soda", "spices", "herbs", "garlic powder", "onion powder",
            "paprika", "cumin", "oregano", "basil", "thyme", "rosemary", "cinnamon", "nutmeg",
            "ginger", "turmeric", "curry powder", "chili powder", "hot sauce", "ketchup",
            "mustard", "mayo", "mayonnaise", "relish", "pickles", "jam", "jelly",
            "peanut butter", "almond butter", "tahini", "coconut oil",
        ],
    ),
    (
        CategoryLabel::CannedGoods,
        &[
            "canned tomatoes", "tomato sauce", "tomato paste", "canned corn", "canned beans",
            "black beans", "kidney beans", "chickpeas", "lentils", "canned tuna",
            "canned salmon", "chicken broth", "beef broth", "vegetable broth", "coconut milk",
            "canned pumpkin", "canned peaches", "canned pears", "pasta sauce", "salsa", "soup",
            "canned soup",
        ],
    ),
    (
        CategoryLabel::PersonalCare,
        &[
            "shampoo", "conditioner", "soap", "body wash", "toothpaste", "toothbrush",
            "deodorant", "lotion", "sunscreen", "razor", "shaving cream", "tissue", "tissues",
            "toilet paper", "paper towels", "cotton swabs", "band aid", "medicine", "vitamins",
        ],
    ),
    (
        CategoryLabel::Household,
        &[
            "detergent", "fabric softener", "dish soap", "sponge", "paper plates",
            "plastic bags", "aluminum foil", "plastic wrap", "parchment paper",
            "cleaning supplies", "bleach", "disinfectant", "trash bags", "light bulb",
            "batteries", "laundry pods",
        ],
    ),
    (
        CategoryLabel::Bakery,
        &[
            "cake", "pie", "donut", "donuts", "danish", "pastry", "cupcake", "brownie", "cookie",
            "bread loaf", "dinner rolls", "bagels", "croissant", "muffin",
        ],
    ),
];
