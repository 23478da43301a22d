//! Predefined study drug lists.
//!
//! Curated name lists for common batch queries, keyed by drug class. The
//! antipsychotics list is the original study set this service was built
//! around.

use serde::Serialize;
use utoipa::ToSchema;

pub const ANTIPSYCHOTICS: &[&str] = &[
    "chlorpromazine",
    "fluphenazine",
    "haloperidol",
    "loxapine",
    "molindone",
    "perphenazine",
    "thioridazine",
    "thiothixene",
    "trifluoperazine",
    "pimozide",
    "clozapine",
    "risperidone",
    "olanzapine",
    "quetiapine",
    "ziprasidone",
    "aripiprazole",
    "paliperidone",
    "amisulpride",
    "sertindole",
    "zotepine",
    "lurasidone",
    "asenapine",
    "iloperidone",
    "cariprazine",
    "brexpiprazole",
    "lumateperone",
    "aripiprazole lauroxil",
];

pub const ANTIDEPRESSANTS: &[&str] = &[
    "fluoxetine",
    "sertraline",
    "paroxetine",
    "citalopram",
    "escitalopram",
    "venlafaxine",
    "duloxetine",
    "bupropion",
    "mirtazapine",
    "trazodone",
];

pub const MOOD_STABILIZERS: &[&str] = &[
    "lithium",
    "valproate",
    "carbamazepine",
    "lamotrigine",
    "oxcarbazepine",
];

/// The predefined lists as served by the API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ToSchema)]
pub struct DrugLists {
    pub antipsychotics: Vec<String>,
    pub antidepressants: Vec<String>,
    pub mood_stabilizers: Vec<String>,
}

/// Assemble the predefined lists.
pub fn predefined() -> DrugLists {
    fn owned(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    DrugLists {
        antipsychotics: owned(ANTIPSYCHOTICS),
        antidepressants: owned(ANTIDEPRESSANTS),
        mood_stabilizers: owned(MOOD_STABILIZERS),
    }
}
