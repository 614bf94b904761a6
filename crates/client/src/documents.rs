//! GraphQL documents issued by the job board.
//!
//! The job detail selection is shared through the `JobDetail` fragment so the
//! cache entry written after `CreateJob` has exactly the shape `JobQuery` reads.

/// A named, parameterised request template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Document {
    pub operation_name: &'static str,
    pub source: &'static str,
}

macro_rules! job_detail_fragment {
    () => {
        r#"
fragment JobDetail on Job {
  id
  title
  description
  company {
    id
    name
  }
}
"#
    };
}

/// The `JobDetail` fragment source.
pub const JOB_DETAIL_FRAGMENT: &str = job_detail_fragment!();

pub const JOBS_QUERY: Document = Document {
    operation_name: "JobsQuery",
    source: r#"
query JobsQuery {
  jobs {
    id
    title
    company {
      id
      name
    }
  }
}
"#,
};

pub const JOB_QUERY: Document = Document {
    operation_name: "JobQuery",
    source: concat!(
        r#"
query JobQuery($id: ID!) {
  job(id: $id) {
    ...JobDetail
  }
}
"#,
        job_detail_fragment!()
    ),
};

pub const COMPANY_QUERY: Document = Document {
    operation_name: "CompanyQuery",
    source: r#"
query CompanyQuery($id: ID!) {
  company(id: $id) {
    id
    name
    description
    jobs {
      id
      title
    }
  }
}
"#,
};

pub const CREATE_JOB_MUTATION: Document = Document {
    operation_name: "CreateJob",
    source: concat!(
        r#"
mutation CreateJob($input: CreateJobInput) {
  job: createJob(input: $input) {
    ...JobDetail
  }
}
"#,
        job_detail_fragment!()
    ),
};
