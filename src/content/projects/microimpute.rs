use super::{NextSteps, ProjectPage, Section};
use crate::view::blocks::{Block, Link};

pub static PAGE: ProjectPage = ProjectPage {
    slug: "microimpute",
    title: "MicroImpute",
    subtitle: "A powerful framework for statistical variable imputation, method comparison and benchmarking",
    sections: &[
        Section {
            title: "Project overview",
            blocks: &[
                Block::Paragraph(
                    "MicroImpute enables variable imputation through different statistical methods, facilitating comparison \
                     and benchmarking across methods through quantile loss calculations. This framework provides researchers \
                     and data scientists with a consistent interface to compare different imputation techniques and determine \
                     which method provides the most accurate results for their specific use case.",
                ),
                Block::Paragraph(
                    "The framework was designed to address the challenge of transferring statistically complex information from \
                     surveys and data sources, enabling more comprehensive economic analyses, using wealth imputation from the \
                     Survey of Consumer Finances (SCF) to the Current Population Survey (CPS), as an example.",
                ),
                Block::Card {
                    title: "🔧 Imputation methods",
                    items: &[
                        "Statistical matching with flexible distance metrics",
                        "Ordinary least squares (OLS) regression",
                        "Quantile regression forests (QRF)",
                        "Quantile regression with multiple quantiles",
                    ],
                },
                Block::Card {
                    title: "✨ Key features",
                    items: &[
                        "Unified API across all imputation methods",
                        "Quantile loss benchmarking for method comparison",
                        "AutoImpute for automatic method selection",
                        "Comprehensive visualization tools",
                    ],
                },
            ],
        },
        Section {
            title: "Documentation preview",
            blocks: &[
                Block::Paragraph(
                    "Explore the comprehensive documentation with examples, API reference, and method comparisons:",
                ),
                Block::Links(&[Link {
                    label: "📚 Open Full Documentation",
                    url: "https://policyengine.github.io/microimpute/",
                }]),
                Block::Paragraph(
                    "💡 The documentation includes installation guides, API reference, method comparisons, and example notebooks",
                ),
            ],
        },
        Section {
            title: "My contributions",
            blocks: &[Block::Bullets(&[
                "Set up the repo structure and configuration",
                "Designed and implemented the core Imputer class providing a common framework for imputation models allowing \
                 easy addition of new statistical methods",
                "Created comprehensive evaluation and benchmarking tools (cross-validation, quantile loss comparison) to compare \
                 imputation accuracy across different methods",
                "Developed the AutoImpute function that automates a full imputation pipeline, training all methods, selecting the \
                 best based on quantile loss metrics and producing final imputations with it",
                "Implemented visualization tools for comparing imputation results and understanding method performance across \
                 income deciles",
                "Implemented features for microdata handling like survey weights integration, quantile-based evaluation, and \
                 sequential imputation of related variables",
                "Built the SCF to CPS wealth imputation pipeline, enabling PolicyEngine to incorporate wealth data into policy \
                 simulations",
                "Wrote a paper on the methodology and findings of the MicroImpute framework",
            ])],
        },
        Section {
            title: "Paper results",
            blocks: &[
                Block::Paragraph(
                    "Our empirical analysis demonstrates that Quantile Regression Forests (QRF) significantly outperforms \
                     traditional imputation methods for wealth imputation from the Survey of Consumer Finances (SCF) to the \
                     Current Population Survey (CPS):",
                ),
                Block::Image {
                    file: "qrf-comparison-chart.png",
                    alt: "QRF Performance Comparison",
                    fallback: "📊 Quantile Loss Comparison Chart",
                },
                Block::Image {
                    file: "wealth-distribution-chart.png",
                    alt: "Wealth Distribution Results",
                    fallback: "📈 Wealth Distribution Chart",
                },
                Block::Card {
                    title: "Key findings:",
                    items: &[
                        "20.5% reduction in average quantile loss compared to OLS regression",
                        "14.8% improvement over Hot Deck Matching methods",
                        "6% better performance than standard Quantile Regression",
                        "Using 5-fold cross-validation on 22,975 SCF households, QRF achieves an average quantile loss of $6.6M, \
                         demonstrating superior distributional accuracy, particularly in the 10th-80th percentile range",
                    ],
                },
                Block::Paragraph(
                    "These improvements enable more accurate policy impact analysis for wealth taxes, asset-dependent benefit \
                     qualifications, and distributional studies across wealth deciles.",
                ),
                Block::Links(&[Link {
                    label: "Read Full Paper →",
                    url: "https://github.com/PolicyEngine/microimpute/blob/main/paper/paper.pdf",
                }]),
            ],
        },
        Section {
            title: "Learnings",
            blocks: &[
                Block::Bullets(&[
                    "Developing microimpute helped me gain so many developer skills! It helped me understand the necessary setup \
                     for building a robust repo and python package (it was the perfect hands-on project to get started with \
                     before jumping to cross-repo development).",
                    "When I started this project I didn't even know what \"imputation\" really entailed, but now I have a solid \
                     understanding of statistical matching, regression techniques, the workings of random forests and quantile \
                     loss metrics.",
                    "Building the imputation API and pipeline from scratch, testing it, using it in a real-world example, and \
                     then writing a paper on it was very interesting and rewarding from the perspective of understanding the \
                     end-to-end process of developing software tools.",
                ]),
                Block::Links(&[Link {
                    label: "View Microimpute →",
                    url: "https://github.com/PolicyEngine/microimpute",
                }]),
            ],
        },
    ],
    next_steps: NextSteps {
        intro: "I will continue working on MicroImpute for my undergrad thesis (if you are interested, keep an eye out for \
                updates). I will focus on implementing:",
        items: &[
            "A random classifier embedded in the QRF model for better handling of categorical variables",
            "Log-loss metric to evaluate imputation accuracy for categorical and boolean variables",
            "New imputation methods like Extremal Random Forests for improved performance at extreme quantiles",
            "Cosine similarity metrics for better evaluation of imputation results",
            "Predictor correlation and selection tools",
            "An imputation dashboard!",
            "And more...",
        ],
        issues: &[Link {
            label: "microimpute issues",
            url: "https://github.com/PolicyEngine/microimpute/issues",
        }],
    },
};
