//! Default instance group mapper.
//!
//! Places the requested jobs on each plan instance group, attributing every
//! job to the single release that ships it. Groups are emitted in plan order
//! and carry no properties; the manifest generator injects those afterwards.

use crate::domain::{InstanceGroup, InstanceGroupSpec, Job, Network, ServiceRelease};
use crate::error::MappingError;
use crate::port::outbound::mapper::{InstanceGroupMapper, RoleJobs};

/// Maps groups by looking up which release provides each job.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReleaseJobMapper;

impl ReleaseJobMapper {
    fn release_for_job<'a>(
        job: &str,
        releases: &'a [ServiceRelease],
    ) -> Result<&'a ServiceRelease, MappingError> {
        let providers: Vec<&ServiceRelease> = releases
            .iter()
            .filter(|release| release.provides(job))
            .collect();

        match providers.as_slice() {
            [] => Err(MappingError::JobNotProvided { job: job.into() }),
            [release] => Ok(release),
            many => Err(MappingError::JobProvidedMultipleTimes {
                job: job.into(),
                count: many.len(),
                releases: many.iter().map(|release| release.name.clone()).collect(),
            }),
        }
    }
}

impl InstanceGroupMapper for ReleaseJobMapper {
    fn map(
        &self,
        groups: &[InstanceGroupSpec],
        releases: &[ServiceRelease],
        stemcell_alias: &str,
        role_jobs: &RoleJobs,
    ) -> Result<Vec<InstanceGroup>, MappingError> {
        if groups.is_empty() {
            return Err(MappingError::NoInstanceGroups);
        }

        let mut mapped = Vec::with_capacity(groups.len());
        for group in groups {
            // Groups without a job list are not part of this deployment.
            let Some(job_names) = role_jobs.get(&group.name) else {
                continue;
            };

            let jobs = job_names
                .iter()
                .map(|job| {
                    Self::release_for_job(job, releases).map(|release| Job {
                        name: job.clone(),
                        release: release.name.clone(),
                        ..Job::default()
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;

            mapped.push(InstanceGroup {
                name: group.name.clone(),
                lifecycle: group.lifecycle.clone(),
                instances: group.instances,
                jobs,
                vm_type: group.vm_type.clone(),
                vm_extensions: group.vm_extensions.clone(),
                stemcell: stemcell_alias.to_string(),
                persistent_disk_type: group.persistent_disk_type.clone(),
                azs: group.azs.clone(),
                networks: group
                    .networks
                    .iter()
                    .map(|name| Network { name: name.clone() })
                    .collect(),
                ..InstanceGroup::default()
            });
        }

        Ok(mapped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn release(name: &str, jobs: &[&str]) -> ServiceRelease {
        ServiceRelease {
            name: name.into(),
            version: "1".into(),
            jobs: jobs.iter().map(|job| job.to_string()).collect(),
        }
    }

    fn group_spec(name: &str, networks: &[&str]) -> InstanceGroupSpec {
        InstanceGroupSpec {
            name: name.into(),
            vm_type: "small".into(),
            persistent_disk_type: Some("ten".into()),
            instances: 2,
            networks: networks.iter().map(|n| n.to_string()).collect(),
            azs: vec!["z1".into()],
            ..InstanceGroupSpec::default()
        }
    }

    fn role_jobs(entries: Vec<(&str, Vec<&str>)>) -> RoleJobs {
        entries
            .into_iter()
            .map(|(group, jobs)| {
                (
                    group.to_string(),
                    jobs.iter().map(|job| job.to_string()).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn maps_groups_onto_the_providing_release() {
        let releases = vec![
            release("kafka", &["kafka_server", "zookeeper_server"]),
            release("loggregator", &["metron_agent"]),
        ];
        let groups = vec![group_spec("kafka_server", &["default"])];
        let table = role_jobs(vec![("kafka_server", vec!["kafka_server", "metron_agent"])]);

        let mapped = ReleaseJobMapper
            .map(&groups, &releases, "only-stemcell", &table)
            .unwrap();

        assert_eq!(mapped.len(), 1);
        let group = &mapped[0];
        assert_eq!(group.stemcell, "only-stemcell");
        assert_eq!(group.instances, 2);
        assert_eq!(group.networks, vec![Network { name: "default".into() }]);
        assert_eq!(group.persistent_disk_type.as_deref(), Some("ten"));
        let jobs: Vec<(&str, &str)> = group
            .jobs
            .iter()
            .map(|job| (job.name.as_str(), job.release.as_str()))
            .collect();
        assert_eq!(jobs, vec![("kafka_server", "kafka"), ("metron_agent", "loggregator")]);
        assert!(group.jobs.iter().all(|job| job.properties.is_empty()));
    }

    #[test]
    fn skips_groups_without_jobs_and_keeps_plan_order() {
        let releases = vec![release("kafka", &["kafka_server", "zookeeper_server"])];
        let groups = vec![
            group_spec("zookeeper_server", &["default"]),
            group_spec("unused", &["default"]),
            group_spec("kafka_server", &["default"]),
        ];
        let table = role_jobs(vec![
            ("kafka_server", vec!["kafka_server"]),
            ("zookeeper_server", vec!["zookeeper_server"]),
        ]);

        let mapped = ReleaseJobMapper
            .map(&groups, &releases, "only-stemcell", &table)
            .unwrap();

        let names: Vec<&str> = mapped.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["zookeeper_server", "kafka_server"]);
    }

    #[test]
    fn rejects_job_no_release_provides() {
        let releases = vec![release("kafka", &["kafka_server"])];
        let groups = vec![group_spec("kafka_server", &["default"])];
        let table = role_jobs(vec![("kafka_server", vec!["kafka_server", "metron_agent"])]);

        let err = ReleaseJobMapper
            .map(&groups, &releases, "only-stemcell", &table)
            .unwrap_err();

        assert_eq!(
            err,
            MappingError::JobNotProvided {
                job: "metron_agent".into()
            }
        );
    }

    #[test]
    fn rejects_job_provided_by_several_releases() {
        let releases = vec![
            release("kafka", &["kafka_server"]),
            release("kafka-fork", &["kafka_server"]),
        ];
        let groups = vec![group_spec("kafka_server", &["default"])];
        let table = role_jobs(vec![("kafka_server", vec!["kafka_server"])]);

        let err = ReleaseJobMapper
            .map(&groups, &releases, "only-stemcell", &table)
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "job 'kafka_server' provided 2 times, by kafka, kafka-fork"
        );
    }

    #[test]
    fn rejects_empty_plan() {
        let err = ReleaseJobMapper
            .map(&[], &[], "only-stemcell", &RoleJobs::new())
            .unwrap_err();
        assert_eq!(err, MappingError::NoInstanceGroups);
    }
}
