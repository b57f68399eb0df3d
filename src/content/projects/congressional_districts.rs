use super::{NextSteps, ProjectPage, Section};
use crate::view::blocks::{Block, Link};

const STATE_LEVEL: &str = r#"# Use a small subset of states for demonstration
demo_state_areas = {
    "California": "0400000US06",
    "Texas": "0400000US48",
    "New York": "0400000US36"
}

state_level_calibrated_dataset = calibrate_single_geography_level(
    microsimulation_class=Microsimulation,
    calibration_areas=demo_state_areas,
    dataset="hf://policyengine/policyengine-us-data/cps_2023.h5",
    db_uri=db_uri,
    dataset_subsample_size=10000,  # Small sample for faster execution
    use_dataset_weights=False,  # Start with equal weights
    regularize_with_l0=True,  # Enable sparsity
    noise_level=10.0
)"#;

const NATIONAL_LEVEL: &str = r#"demo_national_areas = {
    "United States": "0100000US"
}

national_level_calibrated_dataset = calibrate_single_geography_level(
    microsimulation_class=Microsimulation,
    calibration_areas=demo_national_areas,
    dataset="Demo_Dataset_state_level.h5",  # Use state-calibrated dataset
    db_uri=db_uri,
    stack_datasets=False,  # Don't stack since we're using pre-stacked data
    noise_level=0.0,  # Minimal noise to preserve state calibration
    use_dataset_weights=True,  # Start from state-calibrated weights
    regularize_with_l0=False  # No sparsity at national level
)"#;

const ALL_LEVELS: &str = r#"# Use the same subset of states for fair comparison
fully_calibrated_dataset = calibrate_all_levels(
    microsimulation_class=Microsimulation,
    database_stacking_areas=demo_state_areas,
    geo_hierarchy=["0100000US", "0400000US"],
    dataset="hf://policyengine/policyengine-us-data/cps_2023.h5",
    db_uri=db_uri,
    dataset_subsample_size=1000,  # Sample size per area
    regularize_with_l0=True,  # Enable sparsity
    noise_level=10.0,
    raise_error=False  # Don't fail if some targets have no contributing records
)"#;

pub static PAGE: ProjectPage = ProjectPage {
    slug: "congressional-districts",
    title: "Congressional district calibration",
    subtitle: "Enabling granular policy analysis at the congressional district level through survey weight reweighting",
    sections: &[
        Section {
            title: "Project overview",
            blocks: &[Block::Paragraph(
                "Congressional district-level analysis is crucial for understanding how federal policies affect different \
                 constituencies across the United States. This project developed calibration routines to reweight Current \
                 Population Survey (CPS) data to administrative targets to accurately represent demographics and economic \
                 characteristics at the state and congressional district levels.",
            )],
        },
        Section {
            title: "Technical approach",
            blocks: &[
                Block::Paragraph(
                    "Building on the database that Ben created in policyengine_us_data to store all calibration targets, the \
                     calibration routines adjust survey weights using gradient descent optimization:",
                ),
                Block::Notebook {
                    title: "📓 Calibration routines documentation",
                    link: Link {
                        label: "View full notebook →",
                        url: "https://github.com/PolicyEngine/policyengine-data/blob/main/docs/calibration.ipynb",
                    },
                },
                Block::Callout {
                    title: "Method 1: Geographic level iteration",
                    body: "This approach calibrates one geographic level at a time, moving from the lowest (e.g., state) to \
                           highest (e.g., national) in the hierarchy.",
                },
                Block::Code {
                    caption: "Step 1: State level calibration with sparsity",
                    language: "py",
                    source: STATE_LEVEL,
                },
                Block::Code {
                    caption: "Step 2: National level using state-calibrated weights",
                    language: "py",
                    source: NATIONAL_LEVEL,
                },
                Block::Callout {
                    title: "Method 2: All levels at once",
                    body: "This approach stacks the base dataset for multiple geographic areas and calibrates all levels \
                           simultaneously.",
                },
                Block::Code {
                    caption: "Simultaneous calibration across all levels",
                    language: "py",
                    source: ALL_LEVELS,
                },
                Block::Card {
                    title: "When to use each method",
                    items: &[
                        "Geographic level iteration: Use when you have limited computational resources, need fine-grained \
                         control, or have hierarchical targets.",
                        "All levels at once: Use when you have sufficient resources, want to optimize across all levels \
                         simultaneously, or need maximum data richness.",
                    ],
                },
            ],
        },
        Section {
            title: "My contributions",
            blocks: &[Block::Bullets(&[
                "It all started with discussions around calibrating with a matrix in wide or long format. After deciding to move \
                 on with long, I spent time helping develop the new matrix structure to calibrate at multiple geographic levels \
                 simultaneously.",
                "I also spent some time pulling new targets, particularly from the SOI IRS data. Shoutout to Pavel for reviewing \
                 my lengthy document where I tried identifying which variables we model in policyengine_us.",
                "After many discussions, we decided to store all calibration targets in a database, thanks Ben for all the work \
                 creating this in policyengine_us_data. It became clear we would need new code to handle data retrieval and \
                 updates efficiently, generalizing calibration routines to any dataset. policyengine_data was born.",
                "I worked in policyengine_data to implement the new calibration routines compatible with the database structure. \
                 I enabled both single geographic level calibration and simultaneous calibration across multiple levels, \
                 allowing more flexibility for the data enhancement goals PolicyEngine may develop.",
            ])],
        },
        Section {
            title: "Learnings",
            blocks: &[
                Block::Bullets(&[
                    "I've learned so much about practical applications of ML and taking the theory to production.",
                    "Designing the policyengine_data package from scratch, not only to achieve calibration but also keeping in \
                     mind compatibility with other repos and making it easy to develop for those working on it after me gave me \
                     a new perspective on developing large codebases.",
                    "I've also gained a better understanding of how survey design, data sources, and data quality impact data \
                     science pipelines. It's mindblowing how many tools are out there for data enhancement and how much is yet \
                     to come to support representative and reliable policy analysis.",
                ]),
                Block::Links(&[
                    Link {
                        label: "View US Congressional Districts →",
                        url: "https://github.com/PolicyEngine/us-congressional-districts",
                    },
                    Link {
                        label: "View PolicyEngine Data →",
                        url: "https://github.com/PolicyEngine/policyengine-data",
                    },
                ]),
            ],
        },
    ],
    next_steps: NextSteps {
        intro: "The Congressional Districts project is close to the finish line, but there are a couple things left to do:",
        items: &[
            "The UCGID geographic identifier does not represent a household's geographic location fully accurately, and it \
             makes the current implementation not fully agnostic to the data's country of origin. Once policyengine_us is \
             updated with a new geographic identifier, the calibration routines will need to be updated accordingly.",
            "Running calibration for all targets of all geographic levels at once is still a challenge given computational \
             costs. We'll have to break down the calibration process, run it in a larger machine or use cloud computing.",
            "Integration with policyengine_us_data!",
        ],
        issues: &[
            Link {
                label: "policyengine_data issues",
                url: "https://github.com/PolicyEngine/policyengine-data/issues",
            },
            Link {
                label: "policyengine_us_data issues",
                url: "https://github.com/PolicyEngine/policyengine-us-data/issues",
            },
        ],
    },
};
