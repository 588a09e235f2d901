use crate::models::dashboard_types::{MetricCard, ModelPerformance, RecentResult, Trend};

// Example dashboard content. These are literal demo constants and are
// intentionally not derived from the upload queue.

pub fn metrics() -> Vec<MetricCard> {
    vec![
        MetricCard {
            title: "Total Scans",
            value: "2,847",
            change: "+12.5%",
            trend: Trend::Up,
        },
        MetricCard {
            title: "Accuracy Rate",
            value: "95.8%",
            change: "+2.1%",
            trend: Trend::Up,
        },
        MetricCard {
            title: "Positive Cases",
            value: "127",
            change: "-5.2%",
            trend: Trend::Down,
        },
        MetricCard {
            title: "Active Users",
            value: "342",
            change: "+8.7%",
            trend: Trend::Up,
        },
    ]
}

pub fn recent_results() -> Vec<RecentResult> {
    vec![
        RecentResult {
            id: 1,
            filename: "chest_xray_001.jpg",
            prediction: "No Cancer Detected",
            confidence: 94.2,
            risk: "low",
            timestamp: "2 minutes ago",
        },
        RecentResult {
            id: 2,
            filename: "ct_scan_045.dcm",
            prediction: "Suspicious Nodule",
            confidence: 78.6,
            risk: "medium",
            timestamp: "5 minutes ago",
        },
        RecentResult {
            id: 3,
            filename: "chest_xray_034.jpg",
            prediction: "Cancer Detected",
            confidence: 96.1,
            risk: "high",
            timestamp: "8 minutes ago",
        },
        RecentResult {
            id: 4,
            filename: "ct_scan_112.dcm",
            prediction: "No Cancer Detected",
            confidence: 91.7,
            risk: "low",
            timestamp: "12 minutes ago",
        },
        RecentResult {
            id: 5,
            filename: "chest_xray_089.jpg",
            prediction: "Suspicious Area",
            confidence: 82.4,
            risk: "medium",
            timestamp: "15 minutes ago",
        },
    ]
}

pub fn model_performance() -> ModelPerformance {
    ModelPerformance {
        sensitivity: 94.2,
        specificity: 97.1,
        precision: 93.8,
        f1_score: 95.6,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_metric_cards() {
        let cards = metrics();
        assert_eq!(cards.len(), 4);
        assert_eq!(cards[0].title, "Total Scans");
        assert_eq!(cards[2].trend, Trend::Down);
    }

    #[test]
    fn five_recent_results() {
        let rows = recent_results();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[1].filename, "ct_scan_045.dcm");
        assert_eq!(rows[1].risk, "medium");
    }
}
