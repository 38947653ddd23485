//! Static site content.
//!
//! Articles and legal documents are Markdown rendered at view time by
//! `util::markdown`. Listings are ordered newest first.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Service {
    pub title: &'static str,
    pub summary: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
}

/// A research article or news post.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Article {
    pub slug: &'static str,
    pub title: &'static str,
    pub author: &'static str,
    /// ISO date, `YYYY-MM-DD`.
    pub date: &'static str,
    pub tags: &'static [&'static str],
    pub body: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LegalDoc {
    pub slug: &'static str,
    pub title: &'static str,
    pub updated: &'static str,
    pub body: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        title: "Private language models",
        summary: "Fine-tuned models deployed inside your network, with evaluation suites that track quality release over release.",
    },
    Service {
        title: "Agent engineering",
        summary: "Tool-using agents for support, operations and research workflows, with human review where it matters.",
    },
    Service {
        title: "Smart contract audits",
        summary: "Manual review plus property-based fuzzing for Solidity and Rust contracts before mainnet, not after.",
    },
    Service {
        title: "Digital identity",
        summary: "Verifiable credentials and on-chain attestations that integrate with the identity provider you already run.",
    },
    Service {
        title: "Data infrastructure",
        summary: "Retrieval pipelines, vector search and lineage tracking so models answer from sources you can cite.",
    },
    Service {
        title: "Advisory",
        summary: "Architecture reviews and build-versus-buy assessments from engineers who have shipped both.",
    },
];

pub const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Lena Hartmann",
        role: "Managing Director",
        bio: "Ran platform engineering at two payment companies before founding Meridian.",
    },
    TeamMember {
        name: "Tomás Okafor",
        role: "Head of Machine Learning",
        bio: "Builds evaluation tooling and has opinions about benchmark contamination.",
    },
    TeamMember {
        name: "Mira Chen",
        role: "Lead Protocol Engineer",
        bio: "Audited more than forty smart contract systems; maintains two open-source fuzzers.",
    },
    TeamMember {
        name: "Jonas Weber",
        role: "Staff Engineer, Infrastructure",
        bio: "Keeps inference clusters boring. Previously SRE for a large streaming service.",
    },
    TeamMember {
        name: "Priya Raman",
        role: "Identity Architect",
        bio: "Co-author of a verifiable credentials interoperability profile.",
    },
    TeamMember {
        name: "Samuel Idowu",
        role: "Client Partner",
        bio: "Turns vague AI ambitions into scoped, fundable projects.",
    },
];

pub const RESEARCH: &[Article] = &[
    Article {
        slug: "eval-drift-in-production",
        title: "Evaluation drift in production language models",
        author: "Tomás Okafor",
        date: "2025-03-18",
        tags: &["llm", "evaluation"],
        body: "Offline benchmarks stop predicting user satisfaction within weeks of launch.\n\n\
## What we measured\n\n\
We replayed 40,000 anonymised support conversations against three model versions and compared \
rubric scores with the offline suite used to approve each release.\n\n\
## Findings\n\n\
- Offline scores rose **6%** across versions while rubric scores stayed flat.\n\
- Most regressions came from retrieval changes, not the model.\n\n\
We now gate releases on a rolling sample of live traffic instead of a frozen set.",
    },
    Article {
        slug: "zk-proofs-for-kyc",
        title: "Zero-knowledge proofs for KYC without the data lake",
        author: "Priya Raman",
        date: "2025-02-27",
        tags: &["identity", "zk"],
        body: "Know-your-customer checks usually end with a copy of a passport in a vendor database.\n\n\
Selective disclosure lets a verifier learn *over 18* and *resident in the EU* without learning \
the birth date or address. We prototyped this with BBS+ signatures and measured verification at \
under 40 ms on commodity hardware.\n\n\
## Open problems\n\n\
Revocation remains the hard part. Status lists leak less than accumulators but grow linearly.",
    },
    Article {
        slug: "agent-tool-failures",
        title: "How tool-using agents fail",
        author: "Tomás Okafor",
        date: "2025-02-04",
        tags: &["agents"],
        body: "We catalogued 1,200 failed agent runs from three client deployments.\n\n\
| Failure | Share |\n|---|---|\n| Wrong tool arguments | 41% |\n| Premature stop | 23% |\n\
| Loops | 19% |\n| Other | 17% |\n\n\
Argument validation with typed schemas removed most of the first category.",
    },
    Article {
        slug: "reentrancy-after-cancun",
        title: "Reentrancy after Cancun: transient storage pitfalls",
        author: "Mira Chen",
        date: "2025-01-22",
        tags: &["audits", "ethereum"],
        body: "Transient storage makes cheap reentrancy locks possible and introduces a new class of bugs.\n\n\
A lock stored in transient storage is cleared at the end of the transaction, not the call. \
Contracts that assumed otherwise in multicall flows let a second call observe a stale lock.\n\n\
We published the fuzzing harness that found it.",
    },
    Article {
        slug: "rag-citation-accuracy",
        title: "Citation accuracy in retrieval-augmented answers",
        author: "Jonas Weber",
        date: "2024-12-10",
        tags: &["llm", "retrieval"],
        body: "An answer with a citation is only useful if the cited passage supports the claim.\n\n\
Across four corpora, 12% of citations pointed to passages that did not entail the sentence they \
were attached to. Chunk overlap and re-ranking reduced that to 5%.",
    },
    Article {
        slug: "tokenized-bonds-settlement",
        title: "Settlement windows for tokenized bonds",
        author: "Lena Hartmann",
        date: "2024-11-19",
        tags: &["tokenization"],
        body: "Atomic delivery-versus-payment is the headline feature of tokenized securities.\n\n\
In practice, cash legs still settle through traditional rails. We modelled the liquidity cost of \
keeping T+0 on the asset side while cash stays T+1 and found it dominated by intraday credit lines.",
    },
    Article {
        slug: "gpu-scheduling-inference",
        title: "Scheduling mixed inference workloads on shared GPUs",
        author: "Jonas Weber",
        date: "2024-10-30",
        tags: &["infrastructure"],
        body: "Batch embedding jobs and latency-sensitive chat traffic compete for the same accelerators.\n\n\
Priority queues with preemption at the request boundary kept p95 chat latency within 10% of a \
dedicated cluster while raising utilisation from 38% to 71%.",
    },
    Article {
        slug: "wallet-recovery-ux",
        title: "Wallet recovery that people actually complete",
        author: "Priya Raman",
        date: "2024-09-12",
        tags: &["identity", "ux"],
        body: "Seed phrases fail users. Social recovery fails them differently.\n\n\
In a study with 60 participants, passkey-based recovery had an 88% completion rate against 52% \
for guardian-based recovery, mostly because guardians were unreachable.",
    },
];

pub const NEWS: &[Article] = &[
    Article {
        slug: "berlin-office",
        title: "Meridian opens a Berlin office",
        author: "Lena Hartmann",
        date: "2025-03-03",
        tags: &["company"],
        body: "We are opening our second office in Berlin-Kreuzberg to work closer to clients in the DACH region.\n\n\
The team there will focus on identity and tokenization projects.",
    },
    Article {
        slug: "audit-report-published",
        title: "Public audit report for an open lending protocol",
        author: "Mira Chen",
        date: "2025-01-29",
        tags: &["audits"],
        body: "With the client's permission we have published our full audit report, including the two \
high-severity findings and their fixes.",
    },
    Article {
        slug: "evaluation-toolkit-release",
        title: "Open-sourcing our evaluation toolkit",
        author: "Tomás Okafor",
        date: "2024-12-02",
        tags: &["open source", "llm"],
        body: "The rubric runner we use for client evaluations is now available under the Apache 2.0 licence.",
    },
];

pub const LEGAL: &[LegalDoc] = &[
    LegalDoc {
        slug: "privacy",
        title: "Privacy policy",
        updated: "2025-01-15",
        body: "## Data we collect\n\n\
When you submit the contact form we store your name, email address, subject and message so we can reply.\n\n\
## Browser storage\n\n\
We keep your language choice in local storage and your scroll position in session storage. \
Neither is sent to our servers.\n\n\
## Retention\n\n\
Contact submissions are deleted twelve months after the last exchange.",
    },
    LegalDoc {
        slug: "terms",
        title: "Terms of use",
        updated: "2025-01-15",
        body: "## Content\n\n\
Articles on this site are provided for information only and are not investment or legal advice.\n\n\
## Liability\n\n\
We are not liable for decisions made on the basis of published research.",
    },
];

fn find(articles: &'static [Article], slug: &str) -> Option<&'static Article> {
    articles.iter().find(|a| a.slug == slug)
}

#[must_use]
pub fn research_article(slug: &str) -> Option<&'static Article> {
    find(RESEARCH, slug)
}

#[must_use]
pub fn news_post(slug: &str) -> Option<&'static Article> {
    find(NEWS, slug)
}

#[must_use]
pub fn legal_doc(slug: &str) -> Option<&'static LegalDoc> {
    LEGAL.iter().find(|d| d.slug == slug)
}

/// The `count` most recent research articles.
pub fn latest_research(count: usize) -> impl Iterator<Item = &'static Article> {
    RESEARCH.iter().take(count)
}
