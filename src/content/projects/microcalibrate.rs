use super::{NextSteps, ProjectPage, Section};
use crate::view::blocks::{Block, Link};

const DASHBOARD_URL: &str = "https://microcalibrate-git-maria-dashboard-updates-policy-engine.vercel.app/";

pub static PAGE: ProjectPage = ProjectPage {
    slug: "microcalibrate",
    title: "MicroCalibrate",
    subtitle: "Survey weight calibration using gradient descent optimization",
    sections: &[
        Section {
            title: "Project overview",
            blocks: &[
                Block::Paragraph(
                    "MicroCalibrate is a calibration framework that adjusts survey weights to match administrative targets. \
                     Using gradient descent optimization, it ensures that weighted survey statistics align with known \
                     population totals, crucial for accurate policy modeling and distributional analysis. An interactive \
                     dashboard supports detailed exploration of calibration results.",
                ),
                Block::Paragraph(
                    "The framework addresses the challenge of making survey data representative of the true population when \
                     certain demographics are under or over-represented, enabling PolicyEngine to produce more accurate policy \
                     impact estimates across different demographic groups.",
                ),
                Block::Card {
                    title: "⚡ Key capabilities",
                    items: &[
                        "Gradient descent optimization with L0 regularization",
                        "Multi-target calibration in long format (a single weight per record)",
                        "Target assessment based on data availability to warn the user of complex optimization problems",
                        "Evaluation of analytical solutions of the optimization process to help the user understand \
                         calibration constraints",
                        "Optional target exclusion to select the targets being calibrated at once",
                        "Evaluation of calibration performance for each target based on user-provided tolerance levels",
                    ],
                },
                Block::Card {
                    title: "📊 Dashboard features",
                    items: &[
                        "Calibration quality assessment based on loss and distance of final estimates from targets",
                        "Summary of the calibration process with loss and estimate-value curves",
                        "Interactive filtering and exploration of each target's calibration results",
                        "Tables for detailed result inspection with sorting utilities to identify best and worst performing \
                         targets",
                        "Comparison of two calibration runs supported",
                        "Multiple data sources supported, from file uploads to GitHub artifacts",
                    ],
                },
            ],
        },
        Section {
            title: "Interactive dashboard",
            blocks: &[
                Block::Paragraph(
                    "Explore real-time calibration monitoring with loss curves, target performance metrics, and weight \
                     distributions:",
                ),
                Block::Image {
                    file: "dashboard-screenshot.png",
                    alt: "MicroCalibrate Dashboard Preview",
                    fallback: "📊 MicroCalibrate Dashboard",
                },
                Block::Links(&[Link {
                    label: "🚀 Open interactive dashboard",
                    url: DASHBOARD_URL,
                }]),
            ],
        },
        Section {
            title: "My contributions",
            blocks: &[Block::Bullets(&[
                "Setting up the repo structure and initial configuration",
                "Built on Nikhil's reweighting algorithm to develop the Calibration class with methods to support the user's \
                 understanding of the calibration process",
                "Integrated the L0 regularization technique implemented by Ben and Max, adding hyperparameter tuning \
                 capabilities",
                "Added evaluation through holdout-targets and robustness checks",
                "Leveraged AI to build a comprehensive dashboard enabling calibration monitoring and comparison",
            ])],
        },
        Section {
            title: "Learnings",
            blocks: &[
                Block::Bullets(&[
                    "I gained a much better understanding of regularization techniques and their tradeoffs, as well as the \
                     importance of balancing reweighting features like the learning rate, dropout, and noise levels.",
                    "I had a lot of fun implementing the dashboard, which was my first time using AI to build a UI. It was a \
                     great way to empathize with the needs a user may have to visualize and understand the calibration \
                     process.",
                ]),
                Block::Links(&[
                    Link {
                        label: "View Microcalibrate →",
                        url: "https://github.com/PolicyEngine/microcalibrate",
                    },
                    Link {
                        label: "View the calibration dashboard →",
                        url: DASHBOARD_URL,
                    },
                ]),
            ],
        },
    ],
    next_steps: NextSteps {
        intro: "I think the repo is in a good place to be used by other PolicyEngine repos, but there are always improvements \
                to be made and new features that can be added. Keeping an eye out for user suggestions and new issues both \
                in L0 and Microcalibrate never hurts!",
        items: &[],
        issues: &[
            Link {
                label: "microcalibrate issues",
                url: "https://github.com/PolicyEngine/microcalibrate/issues",
            },
            Link {
                label: "l0 issues",
                url: "https://github.com/PolicyEngine/L0/issues",
            },
        ],
    },
};
