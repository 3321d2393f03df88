pub mod hypervisor_client;
