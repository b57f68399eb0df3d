use super::{NextSteps, ProjectPage, Section};
use crate::view::blocks::{Block, Link};

const FROM_DATAFRAMES: &str = r#"# Create sample data for demonstration
np.random.seed(42)

# Person-level data
person_data = pd.DataFrame({
    'person_id': range(1000),
    'age': np.random.randint(18, 80, 1000),
    'income': np.random.normal(50000, 15000, 1000),
    'household_id': np.repeat(range(400), [3, 2, 3, 2] * 100)  # Varying household sizes
})

# Household-level data
household_data = pd.DataFrame({
    'household_id': range(400),
    'household_size': np.random.randint(1, 6, 400),
    'housing_cost': np.random.normal(1200, 300, 400),
    'state': np.random.choice(['CA', 'TX', 'NY', 'FL'], 400)
})

# Create entities dictionary
entities = {
    'person': person_data,
    'household': household_data
}

# Create SingleYearDataset
dataset_2023 = SingleYearDataset(
    entities=entities,
    time_period=2023
)"#;

const FROM_HDF5: &str = r#"# Save the dataset to an HDF5 file
file_path = "sample_dataset_2023.h5"
dataset_2023.save(file_path)
print(f"Dataset saved to {file_path}")

# Load the dataset from the HDF5 file
loaded_dataset = SingleYearDataset(file_path=file_path)
print(f"Dataset loaded from file for year: {loaded_dataset.time_period}")
print(f"Loaded entities: {list(loaded_dataset.entities.keys())}")"#;

const FROM_SIMULATION: &str = r#"from policyengine_us import Microsimulation

start_year = 2023
dataset = "hf://policyengine/policyengine-us-data/cps_2023.h5"

sim = Microsimulation(dataset=dataset)

single_year_dataset = SingleYearDataset.from_simulation(sim, time_period=start_year)
single_year_dataset.time_period = start_year

print(f"Dataset created from PolicyEngine US microdata stored in {dataset}")
print(f"Dataset created for time period: {single_year_dataset.time_period}")"#;

const MULTI_YEAR: &str = r#"# Create datasets for multiple years
datasets_by_year = []

for year in [2021, 2022, 2023, 2024]:
    # Create slightly different data for each year (e.g., income growth)
    year_person_data = person_data.copy()
    year_person_data['income'] = year_person_data['income'] * (1.03 ** (year - 2023))  # 3% annual growth

    year_household_data = household_data.copy()
    year_household_data['housing_cost'] = year_household_data['housing_cost'] * (1.05 ** (year - 2023))  # 5% annual growth

    year_entities = {
        'person': year_person_data,
        'household': year_household_data
    }

    year_dataset = SingleYearDataset(
        entities=year_entities,
        time_period=year
    )
    datasets_by_year.append(year_dataset)

# Create MultiYearDataset
multi_year_dataset = MultiYearDataset(datasets=datasets_by_year)"#;

pub static PAGE: ProjectPage = ProjectPage {
    slug: "data-schema",
    title: "New data schema",
    subtitle: "Modernizing PolicyEngine's data architecture for improved performance and flexibility",
    sections: &[
        Section {
            title: "Project overview",
            blocks: &[
                Block::Paragraph(
                    "PolicyEngine's growth demanded a more scalable and maintainable data architecture. This project involved \
                     redesigning how PolicyEngine builds, stores, and retrieves datasets, moving from a class-based structure \
                     full of inheritance, to a more function-based approach improving clarity and developer experience.",
                ),
                Block::Paragraph(
                    "The new schema introduces the simple SingleYearDataset and MultiYearDataset classes (building on Nikhil's \
                     work) that provide a consistent interface for all data entities (loaded in tables) while supporting \
                     dataset generation operations with functions.",
                ),
            ],
        },
        Section {
            title: "Technical implementation",
            blocks: &[
                Block::Notebook {
                    title: "📓 Dataset classes documentation",
                    link: Link {
                        label: "View full notebook →",
                        url: "https://github.com/PolicyEngine/policyengine-data/blob/main/docs/dataset.ipynb",
                    },
                },
                Block::Callout {
                    title: "SingleYearDataset",
                    body: "Creating datasets for a single time period",
                },
                Block::Code {
                    caption: "Method 1: From entity DataFrames",
                    language: "py",
                    source: FROM_DATAFRAMES,
                },
                Block::Code {
                    caption: "Method 2: Loading from HDF5 file",
                    language: "py",
                    source: FROM_HDF5,
                },
                Block::Code {
                    caption: "Method 3: From a PolicyEngine MicroSimulation",
                    language: "py",
                    source: FROM_SIMULATION,
                },
                Block::Callout {
                    title: "MultiYearDataset",
                    body: "Handling data across multiple years",
                },
                Block::Code {
                    caption: "Creating MultiYearDataset from SingleYearDataset list",
                    language: "py",
                    source: MULTI_YEAR,
                },
            ],
        },
        Section {
            title: "My contributions",
            blocks: &[Block::Bullets(&[
                "Generalized Nikhil's SingleYearDataset and MultiYearDataset classes design with some new touches",
                "Adapted Nikhil's key normalization functionality for dataset stacking",
                "Developed class conversion functions for compatibility with the old Dataset class and PolicyEngine's \
                 microsimulation objects",
            ])],
        },
        Section {
            title: "Learnings",
            blocks: &[
                Block::Bullets(&[
                    "I learned the intricacies of the Dataset class and how it can be loaded or retrieved from Hugging Face",
                    "I had a lot of fun working with the new data schema, building on Nikhil's design and adding my own \
                     contributions",
                ]),
                Block::Links(&[
                    Link {
                        label: "View PolicyEngine Data →",
                        url: "https://github.com/PolicyEngine/policyengine-data",
                    },
                    Link {
                        label: "View PolicyEngine Core →",
                        url: "https://github.com/PolicyEngine/policyengine-core",
                    },
                ]),
            ],
        },
    ],
    next_steps: NextSteps {
        intro: "Given that the policyengine_core Simulation object only works with the old Dataset class, updating _core to use \
                the new schema may be a ride. Once that's done though, the policyengine_data repo could be simplified \
                significantly.",
        items: &[],
        issues: &[
            Link {
                label: "policyengine_core",
                url: "https://github.com/PolicyEngine/policyengine-core/issues/394",
            },
            Link {
                label: "policyengine_data",
                url: "https://github.com/PolicyEngine/policyengine-data/issues/21",
            },
        ],
    },
};
