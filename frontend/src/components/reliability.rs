use leptos::prelude::*;
use nationpost::feed::{ReliabilityTier, reliability_label, reliability_tier};

fn tier_class(score: f64) -> &'static str {
    match reliability_tier(score) {
        ReliabilityTier::High => "badge badge-success gap-1",
        ReliabilityTier::Medium => "badge badge-warning gap-1",
        ReliabilityTier::Low => "badge badge-error gap-1",
    }
}

/// 可信度分数徽标，颜色按分档
#[component]
pub fn ReliabilityBadge(score: f64, #[prop(optional)] with_label: bool) -> impl IntoView {
    view! {
        <span class=tier_class(score)>
            {format!("{:.1}", score)}
            {with_label.then(|| view! { <span class="opacity-80">{reliability_label(score)}</span> })}
        </span>
    }
}

pub fn score_text_class(score: f64) -> &'static str {
    match reliability_tier(score) {
        ReliabilityTier::High => "text-success",
        ReliabilityTier::Medium => "text-warning",
        ReliabilityTier::Low => "text-error",
    }
}
