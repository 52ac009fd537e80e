//! Shared fixtures and mock-server helpers for integration tests
#![allow(dead_code)]

use std::time::Duration;

use papers_client::{ClientConfig, PubMedClient};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// ESearch reply for "cancer immunotherapy"
pub const ESEARCH_TWO_IDS: &str = r#"{
    "header": {"type": "esearch", "version": "0.3"},
    "esearchresult": {
        "count": "2",
        "retmax": "2",
        "retstart": "0",
        "idlist": ["12345678", "87654321"],
        "translationset": [],
        "querytranslation": "\"cancer\"[All Fields] AND \"immunotherapy\"[All Fields]"
    }
}"#;

pub const ESEARCH_NO_IDS: &str = r#"{
    "header": {"type": "esearch", "version": "0.3"},
    "esearchresult": {
        "count": "0",
        "retmax": "0",
        "retstart": "0",
        "idlist": [],
        "translationset": [],
        "querytranslation": ""
    }
}"#;

pub const ESEARCH_ERROR: &str = r#"{
    "header": {"type": "esearch", "version": "0.3"},
    "esearchresult": {
        "ERROR": "Invalid query syntax"
    }
}"#;

/// EFetch reply for 12345678 and 87654321, in the opposite order of the search
pub const EFETCH_TWO_RECORDS: &str = r#"<?xml version="1.0" ?>
<!DOCTYPE PubmedArticleSet PUBLIC "-//NLM//DTD PubMedArticle, 1st January 2025//EN" "https://dtd.nlm.nih.gov/ncbi/pubmed/out/pubmed_250101.dtd">
<PubmedArticleSet>
<PubmedArticle>
    <MedlineCitation Status="MEDLINE" Owner="NLM">
        <PMID Version="1">87654321</PMID>
        <Article PubModel="Print">
            <Journal>
                <Title>Cell Biology Letters</Title>
                <JournalIssue>
                    <PubDate><Year>2022</Year><Month>Nov</Month></PubDate>
                </JournalIssue>
            </Journal>
            <ArticleTitle>Membrane dynamics in T cells.</ArticleTitle>
            <AuthorList CompleteYN="Y">
                <Author ValidYN="Y">
                    <LastName>Lee</LastName>
                    <ForeName>Min</ForeName>
                    <AffiliationInfo>
                        <Affiliation>Department of Biology, MIT</Affiliation>
                    </AffiliationInfo>
                </Author>
                <Author ValidYN="Y">
                    <LastName>Park</LastName>
                    <ForeName>Ji</ForeName>
                    <AffiliationInfo>
                        <Affiliation>Department of Biology, MIT</Affiliation>
                    </AffiliationInfo>
                </Author>
            </AuthorList>
        </Article>
    </MedlineCitation>
</PubmedArticle>
<PubmedArticle>
    <MedlineCitation Status="MEDLINE" Owner="NLM">
        <PMID Version="1">12345678</PMID>
        <Article PubModel="Print-Electronic">
            <Journal>
                <Title>Journal of Immunotherapy</Title>
                <JournalIssue>
                    <PubDate><Year>2023</Year><Month>Mar</Month><Day>15</Day></PubDate>
                </JournalIssue>
            </Journal>
            <ArticleTitle>Novel approach to checkpoint blockade, in vivo.</ArticleTitle>
            <AuthorList CompleteYN="Y">
                <Author ValidYN="Y">
                    <LastName>Doe</LastName>
                    <ForeName>Jane</ForeName>
                    <AffiliationInfo>
                        <Affiliation>Genentech Inc, South San Francisco, CA, USA. Electronic address: jdoe@gene.com.</Affiliation>
                    </AffiliationInfo>
                </Author>
                <Author ValidYN="Y">
                    <LastName>Roe</LastName>
                    <ForeName>Richard</ForeName>
                    <AffiliationInfo>
                        <Affiliation>Stanford University, Stanford, CA, USA.</Affiliation>
                    </AffiliationInfo>
                </Author>
            </AuthorList>
        </Article>
    </MedlineCitation>
</PubmedArticle>
</PubmedArticleSet>"#;

pub const EFETCH_EMPTY: &str = r#"<?xml version="1.0" ?>
<PubmedArticleSet>
</PubmedArticleSet>"#;

pub const CSV_HEADER: &str =
    "PubMedID,Title,PublicationDate,NonAcademicAuthors,Affiliations,CorrespondingEmail";

/// Mount a JSON ESearch reply
pub async fn mount_esearch(server: &MockServer, body: &str) {
    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body.to_string())
                .insert_header("content-type", "application/json"),
        )
        .mount(server)
        .await;
}

/// Mount an XML EFetch reply
pub async fn mount_efetch(server: &MockServer, body: &str) {
    Mock::given(method("GET"))
        .and(path("/efetch.fcgi"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body.to_string())
                .insert_header("content-type", "text/xml"),
        )
        .mount(server)
        .await;
}

/// Client pointing at a mock server
pub fn create_mock_client(server: &MockServer) -> PubMedClient {
    create_mock_client_with(
        server,
        ClientConfig::new().with_timeout(Duration::from_secs(5)),
    )
}

pub fn create_mock_client_with(server: &MockServer, config: ClientConfig) -> PubMedClient {
    let config = config.with_base_url(server.uri()).with_rate_limit(100.0);

    PubMedClient::with_config(config).expect("client should build")
}
