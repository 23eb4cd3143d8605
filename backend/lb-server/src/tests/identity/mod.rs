mod identity_flow;
