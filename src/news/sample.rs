//! 随包附带的样例文章，用于首屏和后端不可达时的回退

use nationpost_shared::Article;

use super::normalize::excerpt_from;

#[allow(clippy::too_many_arguments)]
fn sample(
    id: &str,
    title: &str,
    description: &str,
    thumbnail: &str,
    reliability_score: f64,
    category: &str,
    author: &str,
    published_at: &str,
    block_hash: &str,
) -> Article {
    Article {
        id: id.to_string(),
        title: title.to_string(),
        excerpt: excerpt_from(description),
        thumbnail: thumbnail.to_string(),
        reliability_score,
        category: category.to_string(),
        author: author.to_string(),
        published_at: published_at.to_string(),
        block_hash: Some(block_hash.to_string()),
    }
}

/// 固定的样例集合
pub fn sample_articles() -> Vec<Article> {
    vec![
        sample(
            "1",
            "“Article 32 enables every citizen to approach Supreme Court for enforcement of fundamental rights”, says CJI",
            "The Chief Justice said that Article 32 of the Constitution gives every citizen the right to move the Supreme Court for enforcement of fundamental rights.",
            "https://th-i.thgim.com/public/incoming/4caom7/article70287761.ece/alternates/LANDSCAPE_1200/10215_16_11_2025_17_17_50_1_WHATSAPPIMAGE2025_11_16AT120624PM.JPEG",
            9.0,
            "geopolitics",
            "Uday Pandey",
            "2024-12-20",
            "b2e4c6a8d1f3a5b7c9e2f4a6b8d1c3e5f7a9b2c4d6e8f1a3b5c7d9e2f4a6b8c1",
        ),
        sample(
            "2",
            "Dharmendra health update: Veteran actor “doing better than earlier” as he recovers at home after hospitalisation",
            "Veteran actor Dharmendra was discharged from Mumbai’s Breach Candy Hospital a week ago and is now recovering at home. Sources say he is “doing better than earlier.”",
            "https://img-s-msn-com.akamaized.net/tenant/amp/entityid/AA1QKCIG.img?w=768&h=432&m=6&x=572&y=249&s=297&d=297",
            9.0,
            "entertainment",
            "Vrundita Jamkar",
            "2025-11-20",
            "e4b7c2d9a1f5e8c3b6d4a9f7c1e2b8d5f9a3c7e1b4d6f2c8a7e3b5d1c9f0a2e6",
        ),
        sample(
            "3",
            "Delhi News LIVE Updates | Red Fort blast: NIA makes first arrest, accused Umar Nabi’s close aide nabbed",
            "The National Investigation Agency (NIA) has arrested Amir Rashid Ali, in whose name the car involved in the attack was registered, from Delhi. Investigations revealed that the car-bomb outside the Red Fort used a mixture of ammonium nitrate and TATP. Also, a blast at the Nowgam Police Station in Jammu & Kashmir (where seized explosives were stored) killed nine people.",
            "https://images.indianexpress.com/2025/11/red-fort-blast-2-3_20251114193330_20251115072800.jpg?w=640",
            10.0,
            "nearby",
            "Himanshi Kanhere",
            "2025-11-16",
            "c1e8f4b2d6a0c3f9e1b7a5d2c4e6f8b3d9a1f5c7e2b4a6d0f3c8b1e7a5d2f9",
        ),
        sample(
            "4",
            "Boeing blunts flydubai fleet setback with new jet order",
            "DUBAI (Reuters) -Boeing hit back at the Dubai Airshow with a provisional order for 75 of its 737 MAX jets from flydubai on Wednesday, a day after the long-time Boeing customer handed an order for 150 competing A321neo aircraft to its arch-rival Airbus.",
            "https://static01.nyt.com/images/2023/05/09/multimedia/09BOEING-sub-czjm/09BOEING-sub-czjm-videoSixteenByNine3000.jpg",
            8.6,
            "business",
            "Chirmiri Patil",
            "2025-11-18",
            "e2c5a8f1d7b3e9c4a6d0f2b8c1e7a3d5f9b2c6e0a4d7f3b1c9e5a2f6d0c8b4",
        ),
        sample(
            "5",
            "The EU warns that Russia will attack a NATO country in the next two to four years; Putin could test Article 5 before 2030",
            "Intelligence services within the European Union warn that Vladimir Putin and Russia may attempt to attack a NATO member state within two to four years, possibly testing the collective defence clause (Article 5) before 2030.",
            "https://img-s-msn-com.akamaized.net/tenant/amp/entityid/AA1QAjBC.img?w=768&h=512&m=6&x=448&y=138&s=154&d=154",
            8.0,
            "geopolitics",
            "Aniket Thakur",
            "2025-11-17",
            "f3a7c9e2b6d4a1f8c5e9b2d7a4c1e6f0b9d3a7c5e1f2b8d4c6e0a3f7b1d9e5",
        ),
        sample(
            "6",
            "GTA 6 Has Been Delayed Again: How Does This Impact the Rest of the Industry?",
            "Grand Theft Auto VI has been delayed again, this time to November 19, 2026, and while the fan community is reeling in its own way, the impacts are not limited to just GTA’s eager audience. Grand Theft Auto is a juggernaut, with GTA V having sold 220 million copies to date",
            "https://indianexpress.com/wp-content/uploads/2023/12/GTA-6-Rockstar-Games.jpg",
            8.4,
            "entertainment",
            "Yash Kanhere",
            "2025-11-05",
            "f2a4b6c8d1e3f5a7b9c2d4e6f8a1b3c5d7e9f2a4b6c8d1e3f5a7b9c2d4e6f8a1",
        ),
    ]
}
