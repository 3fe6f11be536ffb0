//! Seed content for a fresh profile.
//!
//! The content store falls back to this document whenever nothing is
//! persisted yet (or the version gate has just wiped the area), so the
//! public site always has something to render.

use once_cell::sync::Lazy;

use super::types::{
    AboutData, ContactInfo, Dashboard, HeroData, PortfolioDocument, Project,
};

static DEFAULT_DOCUMENT: Lazy<PortfolioDocument> = Lazy::new(build_default);

/// The sample document a fresh profile starts from.
pub fn default_document() -> PortfolioDocument {
    DEFAULT_DOCUMENT.clone()
}

fn build_default() -> PortfolioDocument {
    PortfolioDocument {
        hero: HeroData {
            title: "Turning Data Into Decisions".into(),
            subtitle: "DATA ANALYST".into(),
            description: "I help teams find the signal in their data, from exploratory \
                          analysis to production dashboards that people actually use."
                .into(),
        },
        about: AboutData {
            background: "Statistics and Data Science".into(),
            years_of_experience: "5+".into(),
            industries: "finance, healthcare, and e-commerce".into(),
            degree: "Master's".into(),
            field: "Data Science".into(),
            university: "State University".into(),
            certifications:
                "Google Data Analytics, Microsoft Power BI, AWS Data Analytics Specialty".into(),
            headshot: "https://images.unsplash.com/photo-1569913486515-b74bf7751574?auto=format&fit=crop&w=900&q=80".into(),
            journey: "With a background in Statistics and Data Science, I've developed a \
                      passion for uncovering the stories hidden within data. My analytical \
                      approach combines technical expertise with creative problem-solving \
                      to deliver insights that drive business value."
                .into(),
            sections: Vec::new(),
            headshot_settings: None,
        },
        projects: vec![
            Project {
                id: 1,
                title: "Sales Data Analysis".into(),
                description: "Analyzed 5 years of sales data to identify trends and \
                              opportunities for growth, resulting in a 15% increase in revenue."
                    .into(),
                tags: vec!["Tableau".into(), "SQL".into(), "Excel".into()],
                image: "https://images.unsplash.com/photo-1649972904349-6e44c42644a7?auto=format&fit=crop&w=800&q=80".into(),
                demo_link: "#".into(),
                code_link: "#".into(),
                is_hidden: false,
            },
            Project {
                id: 2,
                title: "Customer Segmentation".into(),
                description: "Developed a customer segmentation model that improved marketing \
                              campaign efficiency by 23%."
                    .into(),
                tags: vec!["Python".into(), "Scikit-learn".into(), "Pandas".into()],
                image: "https://images.unsplash.com/photo-1488590528505-98d2b5aba04b?auto=format&fit=crop&w=800&q=80".into(),
                demo_link: "#".into(),
                code_link: "#".into(),
                is_hidden: false,
            },
            Project {
                id: 3,
                title: "Predictive Analytics Dashboard".into(),
                description: "Created an interactive dashboard that forecasts future sales \
                              with 92% accuracy."
                    .into(),
                tags: vec!["Power BI".into(), "R".into(), "DAX".into()],
                image: "https://images.unsplash.com/photo-1518770660439-4636190af475?auto=format&fit=crop&w=800&q=80".into(),
                demo_link: "#".into(),
                code_link: "#".into(),
                is_hidden: false,
            },
            Project {
                id: 4,
                title: "Supply Chain Optimization".into(),
                description: "Optimized inventory levels across 12 warehouses, reducing costs \
                              by 18% while maintaining service levels."
                    .into(),
                tags: vec!["Python".into(), "Optimization".into(), "Visualization".into()],
                image: "https://images.unsplash.com/photo-1461749280684-dccba630e2f6?auto=format&fit=crop&w=800&q=80".into(),
                demo_link: "#".into(),
                code_link: "#".into(),
                is_hidden: false,
            },
        ],
        dashboards: vec![
            Dashboard {
                id: 1,
                title: "Sales Performance Dashboard".into(),
                description: "Interactive visualization of sales trends across regions and \
                              product categories."
                    .into(),
                tags: vec!["Sales".into(), "Regional".into()],
                image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?auto=format&fit=crop&w=800&q=80".into(),
                demo_link: "#".into(),
                code_link: "#".into(),
                tool: "Tableau".into(),
                featured: true,
                is_hidden: false,
            },
            Dashboard {
                id: 2,
                title: "Customer Behavior Analysis".into(),
                description: "Deep dive into customer segmentation and purchasing patterns."
                    .into(),
                tags: vec!["Segmentation".into(), "Retention".into()],
                image: "https://images.unsplash.com/photo-1460925895917-afdab827c52f?auto=format&fit=crop&w=800&q=80".into(),
                demo_link: "#".into(),
                code_link: "#".into(),
                tool: "Power BI".into(),
                featured: false,
                is_hidden: false,
            },
            Dashboard {
                id: 3,
                title: "Market Trend Forecast".into(),
                description: "Predictive model visualizing future market trends based on \
                              historical data."
                    .into(),
                tags: vec!["Forecasting".into(), "Time Series".into()],
                image: "https://images.unsplash.com/photo-1590283603385-17ffb3a7f29f?auto=format&fit=crop&w=800&q=80".into(),
                demo_link: "#".into(),
                code_link: "#".into(),
                tool: "Plotly".into(),
                featured: false,
                is_hidden: false,
            },
            Dashboard {
                id: 4,
                title: "Real-time Operations Monitor".into(),
                description: "Live monitoring dashboard for key operational metrics.".into(),
                tags: vec!["Operations".into(), "Live".into()],
                image: "https://images.unsplash.com/photo-1504868584819-f8e8b4b6d7e3?auto=format&fit=crop&w=800&q=80".into(),
                demo_link: "#".into(),
                code_link: "#".into(),
                tool: "Grafana".into(),
                featured: false,
                is_hidden: false,
            },
        ],
        contact_info: ContactInfo {
            email: "your.email@example.com".into(),
            phone: "+1 (123) 456-7890".into(),
            location: "City, State, Country".into(),
            linkedin_url: "https://linkedin.com/in/yourusername".into(),
            github_url: "https://github.com/yourusername".into(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_document_is_well_formed() {
        let doc = default_document();
        assert_eq!(doc.projects.len(), 4);
        assert_eq!(doc.dashboards.len(), 4);
        assert!(doc.projects.iter().all(|p| !p.is_hidden));
        // Seed content respects the single-featured intent
        assert_eq!(doc.dashboards.iter().filter(|d| d.featured).count(), 1);
    }

    #[test]
    fn test_default_ids_are_unique() {
        let doc = default_document();
        let mut ids: Vec<u32> = doc.projects.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), doc.projects.len());
    }
}
