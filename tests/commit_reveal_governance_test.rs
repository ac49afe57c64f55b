// Contract object and pure resolver tests.
//
// Endpoint behavior is covered by the scenario tests in
// governance_blackbox_test.rs; these only exercise the types directly.

use commit_reveal_governance::types::{
    Proposal, ProposalCategory, ProposalStatistics, ProposalStatus,
};
use multiversx_sc_scenario::api::{DebugApi, StaticApi};
use multiversx_sc_scenario::imports::*;

type GovernanceContract = commit_reveal_governance::ContractObj<DebugApi>;

fn proposal(vote_count: u64, quorum: u64, end_block: u64, executed: bool) -> Proposal<StaticApi> {
    Proposal {
        id: 1,
        title: ManagedBuffer::from("Adopt charter"),
        description: ManagedBuffer::from("Ratify the founding charter"),
        category: ProposalCategory::Governance,
        vote_count: BigUint::from(vote_count),
        created_at: 1_000,
        created_block: 10,
        end_block,
        creator: ManagedAddress::zero(),
        executed,
        quorum_required: BigUint::from(quorum),
    }
}

#[test]
fn test_contract_builds() {
    let _: fn() -> GovernanceContract = commit_reveal_governance::contract_obj;
}

#[test]
fn test_category_codes() {
    assert_eq!(ProposalCategory::from_code(0), None);
    assert_eq!(
        ProposalCategory::from_code(1),
        Some(ProposalCategory::Governance)
    );
    assert_eq!(ProposalCategory::from_code(2), Some(ProposalCategory::Treasury));
    assert_eq!(
        ProposalCategory::from_code(3),
        Some(ProposalCategory::Technical)
    );
    assert_eq!(ProposalCategory::from_code(4), None);
    assert_eq!(ProposalCategory::Technical.code(), 3);
}

#[test]
fn test_status_follows_block_height() {
    let p = proposal(3, 100, 20, false);
    assert_eq!(p.status_at(10), ProposalStatus::Active);
    assert_eq!(p.status_at(20), ProposalStatus::Active);
    assert_eq!(p.status_at(21), ProposalStatus::Failed);
    assert_eq!(p.status_at(10_000), ProposalStatus::Failed);

    let p = proposal(100, 100, 20, false);
    assert_eq!(p.status_at(20), ProposalStatus::Active);
    assert_eq!(p.status_at(21), ProposalStatus::Passed);
}

#[test]
fn test_executed_is_terminal() {
    let p = proposal(100, 100, 20, true);
    assert_eq!(p.status_at(21), ProposalStatus::Executed);
    assert_eq!(p.status_at(5_000), ProposalStatus::Executed);
}

#[test]
fn test_status_names() {
    assert_eq!(ProposalStatus::Active.as_str(), "active");
    assert_eq!(ProposalStatus::Passed.as_str(), "passed");
    assert_eq!(ProposalStatus::Failed.as_str(), "failed");
    assert_eq!(ProposalStatus::Executed.as_str(), "executed");
}

#[test]
fn test_statistics_percentage_truncates() {
    let stats = ProposalStatistics::from_proposal(&proposal(2, 3, 20, false), 15);
    assert_eq!(stats.percentage, BigUint::<StaticApi>::from(66u64));
    assert_eq!(stats.status, ProposalStatus::Active);

    let stats = ProposalStatistics::from_proposal(&proposal(250, 100, 20, false), 21);
    assert_eq!(stats.percentage, BigUint::<StaticApi>::from(250u64));
    assert_eq!(stats.status, ProposalStatus::Passed);
}

#[test]
fn test_statistics_zero_quorum() {
    let stats = ProposalStatistics::from_proposal(&proposal(7, 0, 20, false), 21);
    assert_eq!(stats.percentage, BigUint::<StaticApi>::zero());
    assert_eq!(stats.quorum_required, BigUint::<StaticApi>::zero());
    assert_eq!(stats.status, ProposalStatus::Passed);
}
