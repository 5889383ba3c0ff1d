//! Static question bank. Order matters: answer arrays submitted by clients are
//! positional and must line up with these slices index-for-index.

use crate::assessment::models::{
    AptitudeCategory::{self, *},
    AptitudeQuestion,
    InterestCategory::{self, *},
    InterestQuestion,
};

/// Highest value on the interest agreement scale.
pub const MAX_RATING: u8 = 5;
/// Lowest value on the interest agreement scale.
pub const MIN_RATING: u8 = 1;

const fn apt(
    id: u32,
    category: AptitudeCategory,
    question: &'static str,
    options: &'static [&'static str],
    correct_answer: usize,
) -> AptitudeQuestion {
    AptitudeQuestion {
        id,
        category,
        question,
        options,
        correct_answer,
    }
}

const fn int(id: u32, category: InterestCategory, question: &'static str) -> InterestQuestion {
    InterestQuestion {
        id,
        category,
        question,
    }
}

#[rustfmt::skip]
pub static APTITUDE_QUESTIONS: &[AptitudeQuestion] = &[
    apt(1, Verbal, "Which word is a synonym for \"ephemeral\"?", &["Eternal", "Transient", "Powerful", "Common"], 1),
    apt(2, Verbal, "Complete the analogy: Tree is to Forest as Star is to...", &["Planet", "Galaxy", "Sun", "Night"], 1),
    apt(3, Verbal, "Identify the error: \"The team of players are celebrating their victory.\"", &["team of players", "are celebrating", "their victory", "No error"], 1),
    apt(4, Verbal, "What does the idiom \"bite the bullet\" mean?", &["To eat quickly", "To get injured", "To face a difficult situation with courage", "To make a mistake"], 2),
    apt(5, Verbal, "Which word does not belong? \"Apple, Banana, Rose, Orange\"", &["Apple", "Banana", "Rose", "Orange"], 2),
    apt(6, Verbal, "Which word is an antonym for \"verbose\"?", &["Talkative", "Wordy", "Succinct", "Loud"], 2),
    apt(7, Logical, "What number comes next in the sequence: 2, 5, 11, 23, ?", &["46", "47", "48", "49"], 1),
    apt(8, Logical, "If all Zips are Zaps and some Zaps are Zops, what can be concluded?", &["All Zips are Zops", "Some Zips are Zops", "No Zips are Zops", "Cannot be determined"], 3),
    apt(9, Logical, "A is the father of B. B is the sister of C. How is A related to C?", &["Father", "Uncle", "Brother", "Grandfather"], 0),
    apt(10, Logical, "If a plane crashes on the border of the USA and Canada, where do they bury the survivors?", &["USA", "Canada", "Nowhere", "Depends on nationality"], 2),
    apt(11, Logical, "Which shape completes the pattern: Square, Triangle, Circle, Square, ...?", &["Square", "Circle", "Triangle", "Pentagon"], 2),
    apt(12, Logical, "Cup is to Coffee as Bowl is to...", &["Plate", "Soup", "Spoon", "Food"], 1),
    apt(13, Spatial, "If you rotate a \"d\" 180 degrees, it becomes a...", &["b", "p", "q", "d"], 1),
    apt(14, Spatial, "Which of the following shapes can be folded to form a cube?", &["A cross shape of 6 squares", "A straight line of 6 squares", "A T-shape with 5 squares", "A 2x3 grid of squares"], 0),
    apt(15, Spatial, "Imagine a 3D cube. How many faces does it have?", &["4", "6", "8", "12"], 1),
    apt(16, Spatial, "If you are facing North and turn right, then right again, then left, which direction are you facing?", &["North", "East", "South", "West"], 1),
    apt(17, Spatial, "Which of these is not a 3D shape?", &["Sphere", "Pyramid", "Triangle", "Cylinder"], 2),
    apt(18, Spatial, "Which of the following 2D nets can be folded to form a pyramid?", &["A square with four triangles attached to its sides", "Six squares in a cross shape", "A circle with a sector removed", "Two hexagons and six rectangles"], 0),
    apt(19, Numerical, "What is 15% of 200?", &["15", "20", "30", "40"], 2),
    apt(20, Numerical, "A car travels at 60 km/h. How far will it travel in 2.5 hours?", &["120 km", "150 km", "180 km", "100 km"], 1),
    apt(21, Numerical, "If 3 apples cost $2.10, how much do 7 apples cost?", &["$4.20", "$4.90", "$5.60", "$7.00"], 1),
    apt(22, Numerical, "What is the next prime number after 13?", &["14", "15", "16", "17"], 3),
    apt(23, Numerical, "The average of three numbers is 10. If two numbers are 8 and 12, what is the third number?", &["10", "9", "11", "13"], 0),
    apt(24, Numerical, "A jacket is priced at $120. It's on sale for 25% off. What is the final price?", &["$90", "$95", "$100", "$85"], 0),
];

#[rustfmt::skip]
pub static INTEREST_QUESTIONS: &[InterestQuestion] = &[
    int(1, Realistic, "I enjoy hands-on activities like building models, fixing things, or doing science labs."),
    int(2, Realistic, "I prefer learning by doing, rather than just reading about a topic."),
    int(3, Realistic, "I would rather work with tools and machinery than with abstract ideas."),
    int(4, Realistic, "I feel comfortable working outdoors in different weather conditions."),
    int(5, Investigative, "I'm curious about how things work and enjoy solving complex problems or puzzles."),
    int(6, Investigative, "I like to research topics that interest me deeply and analyze information."),
    int(7, Investigative, "I'm fascinated by scientific and medical discoveries."),
    int(8, Investigative, "I enjoy digging into data to find patterns and draw conclusions."),
    int(9, Artistic, "I enjoy expressing myself through creative activities like writing, music, drawing, or design."),
    int(10, Artistic, "I prefer projects that allow for originality and imagination."),
    int(11, Artistic, "I have a good sense of aesthetics, color, and design."),
    int(12, Artistic, "I'd rather write a fictional story or a poem than a technical report."),
    int(13, Social, "I find it rewarding to help classmates, volunteer, or teach someone something new."),
    int(14, Social, "I enjoy working in groups and collaborating with others on projects."),
    int(15, Social, "I feel a strong desire to care for people who are sick or in need."),
    int(16, Social, "I am good at explaining things to people and listening to their concerns."),
    int(17, Enterprising, "I like to take the lead in group projects, persuade others, and organize events."),
    int(18, Enterprising, "I'm ambitious and enjoy a good debate or competition."),
    int(19, Enterprising, "I am drawn to activities like public speaking, debating, or selling a product."),
    int(20, Enterprising, "I am interested in business, managing money, and leading teams to achieve a goal."),
    int(21, Conventional, "I like to have a clear plan and organized notes when I study."),
    int(22, Conventional, "I'm good at keeping track of details and following instructions carefully."),
    int(23, Conventional, "I feel satisfied when I can organize information neatly in a spreadsheet or a file system."),
    int(24, Conventional, "I prefer tasks that have clear, well-defined procedures and predictable outcomes."),
];
