use serde::{Deserialize, Serialize};

/// Canned "scraped" datasets
///
/// Nothing is fetched; each variant returns the same ten records every time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dataset {
    Imdb,
    Books,
}

type Record = [&'static str; 4];

const IMDB: &[Record] = &[
    ["The Shawshank Redemption", "9.3", "1994", "Frank Darabont"],
    ["The Godfather", "9.2", "1972", "Francis Ford Coppola"],
    ["The Dark Knight", "9.0", "2008", "Christopher Nolan"],
    ["The Godfather Part II", "9.0", "1974", "Francis Ford Coppola"],
    ["12 Angry Men", "9.0", "1957", "Sidney Lumet"],
    ["Schindler's List", "8.9", "1993", "Steven Spielberg"],
    ["The Lord of the Rings: The Return of the King", "8.9", "2003", "Peter Jackson"],
    ["Pulp Fiction", "8.9", "1994", "Quentin Tarantino"],
    ["The Lord of the Rings: The Fellowship of the Ring", "8.8", "2001", "Peter Jackson"],
    ["The Good, the Bad and the Ugly", "8.8", "1966", "Sergio Leone"],
];

const BOOKS: &[Record] = &[
    ["A Light in the Attic", "£51.77", "In stock", "Three"],
    ["Tipping the Velvet", "£53.74", "In stock", "One"],
    ["Soumission", "£50.10", "In stock", "One"],
    ["Sharp Objects", "£47.82", "In stock", "Four"],
    ["Sapiens: A Brief History of Humankind", "£54.23", "In stock", "Five"],
    ["The Requiem Red", "£22.65", "In stock", "One"],
    ["The Dirty Little Secrets of Getting Your Dream Job", "£33.34", "In stock", "Four"],
    [
        "The Coming Woman: A Novel Based on the Life of the Infamous Feminist, Victoria Woodhull",
        "£17.93",
        "In stock",
        "Three",
    ],
    [
        "The Boys in the Boat: Nine Americans and Their Epic Quest for Gold at the 1936 Berlin Olympics",
        "£22.60",
        "In stock",
        "Four",
    ],
    ["The Black Maria", "£52.15", "In stock", "One"],
];

impl Dataset {
    pub const ALL: [Dataset; 2] = [Dataset::Imdb, Dataset::Books];

    /// Column names
    pub fn headers(&self) -> Record {
        match self {
            Dataset::Imdb => ["Title", "Rating", "Year", "Director"],
            Dataset::Books => ["Title", "Price", "Availability", "Rating"],
        }
    }

    /// Page the records pretend to come from
    pub fn source_url(&self) -> &'static str {
        match self {
            Dataset::Imdb => "https://www.imdb.com/search/title/?groups=top_100&sort=user_rating,desc",
            Dataset::Books => "https://books.toscrape.com/",
        }
    }

    pub fn records(&self) -> &'static [Record] {
        match self {
            Dataset::Imdb => IMDB,
            Dataset::Books => BOOKS,
        }
    }

    /// Suggested download name, `<dataset>_data.csv`
    pub fn file_name(&self) -> &'static str {
        match self {
            Dataset::Imdb => "imdb_data.csv",
            Dataset::Books => "books_data.csv",
        }
    }

    /// Records keyed by header, in column order
    pub fn rows(&self) -> Vec<Vec<(&'static str, &'static str)>> {
        let headers = self.headers();
        self.records()
            .iter()
            .map(|r| headers.iter().copied().zip(r.iter().copied()).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_dataset_has_ten_full_records() {
        for ds in Dataset::ALL {
            assert_eq!(ds.records().len(), 10);
            assert!(ds.records().iter().all(|r| r.iter().all(|f| !f.is_empty())));
        }
        assert_eq!(Dataset::Imdb.records()[0][0], "The Shawshank Redemption");
        assert!(Dataset::Books.records().iter().all(|r| r[2] == "In stock"));
    }

    #[test]
    fn rows_pair_headers_with_fields() {
        let rows = Dataset::Books.rows();
        assert_eq!(rows[4][1], ("Price", "£54.23"));
        assert_eq!(rows[4][3], ("Rating", "Five"));
    }

    #[test]
    fn dataset_names_deserialize() {
        let ds: Dataset = serde_json::from_str("\"books\"").unwrap();
        assert_eq!(ds, Dataset::Books);
        assert_eq!(ds.file_name(), "books_data.csv");
    }
}
