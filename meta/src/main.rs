fn main() {
    multiversx_sc_meta_lib::cli_main::<commit_reveal_governance::AbiProvider>();
}
